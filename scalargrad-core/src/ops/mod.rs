//! # Scalar Operations Module (`ops`)
//!
//! Every differentiable operation lives in its own file, holding both halves
//! of the operator:
//!
//! - **`xxx_op` function:** the forward computation. It validates its operands,
//!   promotes bare numbers to constant leaves and appends exactly one result node
//!   tagged with the matching [`Op`] variant. It returns `Result` so that
//!   construction errors surface before the graph is modified.
//! - **`xxx_backward` function:** the local derivative rule, called by the
//!   traversal engine through [`Op`]. It adds (never assigns) into operand gradients.
//!
//! Composed operations (`neg`, `sub`, `div`) only have the forward half; their
//! gradients come from the primitives they are built from.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: add, mul, neg, sub, pow, div.
//! - [`activation`]: tanh, relu.

use crate::autograd::Op;
use crate::error::ScalarGradError;
use crate::graph::{Graph, NodeId};
use crate::value::Value;

pub mod activation;
pub mod arithmetic;

/// An argument to an operation: an existing node or a bare number.
///
/// Bare numbers are promoted to fresh constant leaves when the operation runs,
/// one leaf per use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand<'g> {
    Node(Value<'g>),
    Scalar(f64),
}

impl<'g> From<Value<'g>> for Operand<'g> {
    fn from(value: Value<'g>) -> Self {
        Operand::Node(value)
    }
}

impl<'g> From<&Value<'g>> for Operand<'g> {
    fn from(value: &Value<'g>) -> Self {
        Operand::Node(*value)
    }
}

impl From<f64> for Operand<'_> {
    fn from(x: f64) -> Self {
        Operand::Scalar(x)
    }
}

impl From<f32> for Operand<'_> {
    fn from(x: f32) -> Self {
        Operand::Scalar(f64::from(x))
    }
}

impl From<i32> for Operand<'_> {
    fn from(x: i32) -> Self {
        Operand::Scalar(f64::from(x))
    }
}

/// Fails with `ForeignNode` if `operand` is a node of another graph.
pub(crate) fn ensure_member(
    graph: &Graph,
    operand: &Operand<'_>,
    op_name: &str,
) -> Result<(), ScalarGradError> {
    match operand {
        Operand::Node(value) if !graph.owns(value) => Err(ScalarGradError::ForeignNode {
            operation: op_name.to_string(),
        }),
        _ => Ok(()),
    }
}

/// Returns the node id of `operand`, creating a constant leaf for bare numbers.
/// Membership must already have been checked.
fn promote(graph: &Graph, operand: Operand<'_>) -> NodeId {
    match operand {
        Operand::Node(value) => value.id(),
        Operand::Scalar(x) => graph.constant(x).id(),
    }
}

/// Applies a unary operation.
///
/// Checks membership, promotes the operand, computes the forward value and
/// appends the result node tagged by `build_op`.
///
/// # Arguments
/// * `forward`: computes the output value from the input value.
/// * `build_op`: builds the [`Op`] tag from the input node id.
/// * `op_name`: name of the operation for error messages.
pub(crate) fn apply_unary_op<'g, F, B>(
    graph: &'g Graph,
    a: Operand<'g>,
    forward: F,
    build_op: B,
    op_name: &str,
) -> Result<Value<'g>, ScalarGradError>
where
    F: Fn(f64) -> f64,
    B: FnOnce(NodeId) -> Op,
{
    ensure_member(graph, &a, op_name)?;
    let a_id = promote(graph, a);
    let a_value = graph.nodes()[a_id.index()].value;
    let id = graph.push(forward(a_value), build_op(a_id));
    Ok(Value::new(graph, id))
}

/// Applies a binary operation. See [`apply_unary_op`].
///
/// Both operands are validated before either is promoted, so a failure leaves
/// the graph unchanged.
pub(crate) fn apply_binary_op<'g, F, B>(
    graph: &'g Graph,
    a: Operand<'g>,
    b: Operand<'g>,
    forward: F,
    build_op: B,
    op_name: &str,
) -> Result<Value<'g>, ScalarGradError>
where
    F: Fn(f64, f64) -> f64,
    B: FnOnce([NodeId; 2]) -> Op,
{
    ensure_member(graph, &a, op_name)?;
    ensure_member(graph, &b, op_name)?;
    let a_id = promote(graph, a);
    let b_id = promote(graph, b);
    let (a_value, b_value) = {
        let nodes = graph.nodes();
        (nodes[a_id.index()].value, nodes[b_id.index()].value)
    };
    let id = graph.push(forward(a_value, b_value), build_op([a_id, b_id]));
    Ok(Value::new(graph, id))
}
