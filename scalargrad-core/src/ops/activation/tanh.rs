use crate::autograd::Op;
use crate::error::ScalarGradError;
use crate::graph::{Graph, Node, NodeId};
use crate::ops::{apply_unary_op, Operand};
use crate::value::Value;

// --- Forward Operation ---

/// Applies the hyperbolic tangent.
pub fn tanh_op<'g>(graph: &'g Graph, a: impl Into<Operand<'g>>) -> Result<Value<'g>, ScalarGradError> {
    apply_unary_op(graph, a.into(), f64::tanh, Op::Tanh, "tanh")
}

// --- Backward Operation ---

/// d(tanh x)/dx = 1 - tanh(x)^2, reusing the node's own forward value.
pub(crate) fn tanh_backward(nodes: &mut [Node], input: NodeId, output_value: f64, grad_output: f64) {
    nodes[input.index()].grad += (1.0 - output_value * output_value) * grad_output;
}

impl<'g> Value<'g> {
    /// Applies the hyperbolic tangent.
    pub fn tanh(self) -> Value<'g> {
        tanh_op(self.graph(), self).unwrap_or_else(|e| panic!("Value tanh failed: {}", e))
    }
}

impl Graph {
    /// See [`tanh_op`].
    pub fn tanh<'g>(&'g self, a: impl Into<Operand<'g>>) -> Result<Value<'g>, ScalarGradError> {
        tanh_op(self, a)
    }
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
