use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::ops::arithmetic::mul::mul_op;
use crate::ops::Operand;
use crate::value::Value;

/// Negates an operand, defined as `a * -1`.
pub fn neg_op<'g>(graph: &'g Graph, a: impl Into<Operand<'g>>) -> Result<Value<'g>, ScalarGradError> {
    mul_op(graph, a, -1.0)
}

impl Graph {
    /// See [`neg_op`].
    pub fn neg<'g>(&'g self, a: impl Into<Operand<'g>>) -> Result<Value<'g>, ScalarGradError> {
        neg_op(self, a)
    }
}
