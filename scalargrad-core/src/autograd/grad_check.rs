use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::value::Value;
use approx::relative_eq;
use log::debug;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: analytical grad {analytical_grad:?} != numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNonFinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNonFinite { input_index: usize, value: f64 },

    #[error("Forward function execution failed during gradient check: {0}")]
    Forward(#[from] ScalarGradError),
}

/// Tolerances used by [`check_grad`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradCheckConfig {
    /// Perturbation applied to each input for the central difference.
    pub epsilon: f64,
    pub abs_tolerance: f64,
    pub rel_tolerance: f64,
}

impl Default for GradCheckConfig {
    fn default() -> Self {
        GradCheckConfig {
            epsilon: 1e-6,
            abs_tolerance: 1e-6,
            rel_tolerance: 1e-4,
        }
    }
}

/// Checks analytical gradients against numerical gradients using central finite differences.
///
/// `func` receives a fresh graph and one leaf per entry of `inputs`, and must
/// return the scalar output. It is evaluated once with `backward` to obtain
/// the analytical gradients, then twice per input with that input shifted by
/// `±config.epsilon`.
pub fn check_grad<F>(func: F, inputs: &[f64], config: &GradCheckConfig) -> Result<(), GradCheckError>
where
    F: for<'g> Fn(&'g Graph, &[Value<'g>]) -> Result<Value<'g>, ScalarGradError>,
{
    let analytical_grads: Vec<f64> = {
        let graph = Graph::with_capacity(inputs.len());
        let leaves = make_leaves(&graph, inputs);
        let output = func(&graph, &leaves)?;
        output.backward();
        leaves.iter().map(|leaf| leaf.grad()).collect()
    };

    let evaluate = |values: &[f64]| -> Result<f64, GradCheckError> {
        let graph = Graph::with_capacity(values.len());
        let leaves = make_leaves(&graph, values);
        Ok(func(&graph, &leaves)?.value())
    };

    for (input_index, &analytical_grad) in analytical_grads.iter().enumerate() {
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNonFinite {
                input_index,
                value: analytical_grad,
            });
        }

        let mut shifted = inputs.to_vec();
        shifted[input_index] = inputs[input_index] + config.epsilon;
        let loss_plus = evaluate(&shifted)?;
        shifted[input_index] = inputs[input_index] - config.epsilon;
        let loss_minus = evaluate(&shifted)?;

        let numerical_grad = (loss_plus - loss_minus) / (2.0 * config.epsilon);
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNonFinite {
                input_index,
                loss_plus,
                loss_minus,
            });
        }

        debug!(
            "check_grad: input {}: analytical={}, numerical={}",
            input_index, analytical_grad, numerical_grad
        );
        if !relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = config.abs_tolerance,
            max_relative = config.rel_tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }
    Ok(())
}

fn make_leaves<'g>(graph: &'g Graph, values: &[f64]) -> Vec<Value<'g>> {
    values
        .iter()
        .enumerate()
        .map(|(i, &x)| graph.leaf(x, format!("x{}", i)))
        .collect()
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
