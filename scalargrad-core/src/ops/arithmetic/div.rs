use crate::error::ScalarGradError;
use crate::graph::Graph;
use crate::ops::arithmetic::{mul::mul_op, pow::pow_op};
use crate::ops::{ensure_member, Operand};
use crate::value::Value;

/// Divides two operands, defined as `a * b ** -1`.
///
/// Division by zero follows IEEE-754 (the result is infinite or NaN); it is not an error.
pub fn div_op<'g>(
    graph: &'g Graph,
    a: impl Into<Operand<'g>>,
    b: impl Into<Operand<'g>>,
) -> Result<Value<'g>, ScalarGradError> {
    let (a, b) = (a.into(), b.into());
    ensure_member(graph, &a, "div")?;
    ensure_member(graph, &b, "div")?;
    let reciprocal = pow_op(graph, b, -1.0)?;
    mul_op(graph, a, reciprocal)
}

impl Graph {
    /// See [`div_op`].
    pub fn div<'g>(
        &'g self,
        a: impl Into<Operand<'g>>,
        b: impl Into<Operand<'g>>,
    ) -> Result<Value<'g>, ScalarGradError> {
        div_op(self, a, b)
    }
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
