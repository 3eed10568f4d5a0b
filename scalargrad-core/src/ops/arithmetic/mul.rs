use crate::autograd::Op;
use crate::error::ScalarGradError;
use crate::graph::{Graph, Node, NodeId};
use crate::ops::{apply_binary_op, Operand};
use crate::value::Value;

// --- Forward Operation ---

/// Multiplies two operands: `a * b`.
pub fn mul_op<'g>(
    graph: &'g Graph,
    a: impl Into<Operand<'g>>,
    b: impl Into<Operand<'g>>,
) -> Result<Value<'g>, ScalarGradError> {
    apply_binary_op(graph, a.into(), b.into(), |a, b| a * b, Op::Mul, "mul")
}

// --- Backward Operation ---

/// grad_a += b * grad_output, grad_b += a * grad_output
///
/// `a` and `b` may be the same node (`x * x`); both contributions then land on it.
pub(crate) fn mul_backward(nodes: &mut [Node], [a, b]: [NodeId; 2], grad_output: f64) {
    let a_value = nodes[a.index()].value;
    let b_value = nodes[b.index()].value;
    nodes[a.index()].grad += b_value * grad_output;
    nodes[b.index()].grad += a_value * grad_output;
}

impl Graph {
    /// See [`mul_op`].
    pub fn mul<'g>(
        &'g self,
        a: impl Into<Operand<'g>>,
        b: impl Into<Operand<'g>>,
    ) -> Result<Value<'g>, ScalarGradError> {
        mul_op(self, a, b)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
