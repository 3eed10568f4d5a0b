// src/ops/arithmetic/add.rs

use crate::autograd::Op;
use crate::error::ScalarGradError;
use crate::graph::{Graph, Node, NodeId};
use crate::ops::{apply_binary_op, Operand};
use crate::value::Value;

// --- Forward Operation ---

/// Adds two operands: `a + b`.
pub fn add_op<'g>(
    graph: &'g Graph,
    a: impl Into<Operand<'g>>,
    b: impl Into<Operand<'g>>,
) -> Result<Value<'g>, ScalarGradError> {
    apply_binary_op(graph, a.into(), b.into(), |a, b| a + b, Op::Add, "add")
}

// --- Backward Operation ---

/// d(a + b)/da = d(a + b)/db = 1
pub(crate) fn add_backward(nodes: &mut [Node], [a, b]: [NodeId; 2], grad_output: f64) {
    nodes[a.index()].grad += grad_output;
    nodes[b.index()].grad += grad_output;
}

impl Graph {
    /// See [`add_op`].
    pub fn add<'g>(
        &'g self,
        a: impl Into<Operand<'g>>,
        b: impl Into<Operand<'g>>,
    ) -> Result<Value<'g>, ScalarGradError> {
        add_op(self, a, b)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
