// src/ops/arithmetic/pow.rs

use crate::autograd::Op;
use crate::error::ScalarGradError;
use crate::graph::{Graph, Node, NodeId};
use crate::ops::{apply_unary_op, Operand};
use crate::value::Value;

// --- Forward Operation ---

/// Raises `base` to a constant power: `base ** exponent`.
///
/// The exponent must be a finite number. A node exponent (or NaN/infinity) fails
/// with `InvalidExponent` before anything is added to the graph: gradients with
/// respect to the exponent are not supported.
pub fn pow_op<'g>(
    graph: &'g Graph,
    base: impl Into<Operand<'g>>,
    exponent: impl Into<Operand<'g>>,
) -> Result<Value<'g>, ScalarGradError> {
    let exponent = match exponent.into() {
        Operand::Scalar(k) if k.is_finite() => k,
        Operand::Scalar(k) => {
            return Err(ScalarGradError::InvalidExponent {
                found: k.to_string(),
            })
        }
        Operand::Node(node) => {
            return Err(ScalarGradError::InvalidExponent {
                found: format!("node {:?}", node.id()),
            })
        }
    };
    apply_unary_op(
        graph,
        base.into(),
        |x| x.powf(exponent),
        |base| Op::Pow { base, exponent },
        "pow",
    )
}

// --- Backward Operation ---

/// d(x^k)/dx = k * x^(k-1)
pub(crate) fn pow_backward(nodes: &mut [Node], base: NodeId, exponent: f64, grad_output: f64) {
    let x = nodes[base.index()].value;
    nodes[base.index()].grad += exponent * x.powf(exponent - 1.0) * grad_output;
}

// --- Value Methods (call the fallible function) ---

impl<'g> Value<'g> {
    /// Raises this value to a constant power.
    ///
    /// # Panics
    /// If `exponent` is not finite. Use [`try_pow`](Value::try_pow) to get the error instead.
    pub fn pow(self, exponent: f64) -> Value<'g> {
        pow_op(self.graph(), self, exponent)
            .unwrap_or_else(|e| panic!("Value power operation failed: {}", e))
    }

    /// Fallible form of [`pow`](Value::pow) accepting any operand as exponent.
    pub fn try_pow(self, exponent: impl Into<Operand<'g>>) -> Result<Value<'g>, ScalarGradError> {
        pow_op(self.graph(), self, exponent)
    }
}

impl Graph {
    /// See [`pow_op`].
    pub fn pow<'g>(
        &'g self,
        base: impl Into<Operand<'g>>,
        exponent: impl Into<Operand<'g>>,
    ) -> Result<Value<'g>, ScalarGradError> {
        pow_op(self, base, exponent)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
