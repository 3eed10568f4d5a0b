use crate::autograd::Op;
use crate::error::ScalarGradError;
use crate::graph::{Graph, Node, NodeId};
use crate::ops::{apply_unary_op, Operand};
use crate::value::Value;

// --- Forward Operation ---

/// Applies the Rectified Linear Unit: `x` if `x > 0`, else `0`.
pub fn relu_op<'g>(graph: &'g Graph, a: impl Into<Operand<'g>>) -> Result<Value<'g>, ScalarGradError> {
    apply_unary_op(
        graph,
        a.into(),
        |x| if x > 0.0 { x } else { 0.0 },
        Op::Relu,
        "relu",
    )
}

// --- Backward Operation ---

/// grad = grad_output * (input > 0). The kink at exactly 0 gets gradient 0.
pub(crate) fn relu_backward(nodes: &mut [Node], input: NodeId, grad_output: f64) {
    let mask = if nodes[input.index()].value > 0.0 { 1.0 } else { 0.0 };
    nodes[input.index()].grad += mask * grad_output;
}

impl<'g> Value<'g> {
    /// Applies the Rectified Linear Unit.
    pub fn relu(self) -> Value<'g> {
        relu_op(self.graph(), self).unwrap_or_else(|e| panic!("Value relu failed: {}", e))
    }
}

impl Graph {
    /// See [`relu_op`].
    pub fn relu<'g>(&'g self, a: impl Into<Operand<'g>>) -> Result<Value<'g>, ScalarGradError> {
        relu_op(self, a)
    }
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
