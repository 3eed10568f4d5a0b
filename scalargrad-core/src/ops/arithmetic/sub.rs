use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::ops::arithmetic::{add::add_op, neg::neg_op};
use crate::ops::{ensure_member, Operand};
use crate::value::Value;

/// Subtracts two operands, defined as `a + (-b)`.
pub fn sub_op<'g>(
    graph: &'g Graph,
    a: impl Into<Operand<'g>>,
    b: impl Into<Operand<'g>>,
) -> Result<Value<'g>, ScalarGradError> {
    let (a, b) = (a.into(), b.into());
    // Validate `a` before `-b` is built so a failure allocates nothing.
    ensure_member(graph, &a, "sub")?;
    ensure_member(graph, &b, "sub")?;
    let neg_b = neg_op(graph, b)?;
    add_op(graph, a, neg_b)
}

impl Graph {
    /// See [`sub_op`].
    pub fn sub<'g>(
        &'g self,
        a: impl Into<Operand<'g>>,
        b: impl Into<Operand<'g>>,
    ) -> Result<Value<'g>, ScalarGradError> {
        sub_op(self, a, b)
    }
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
