use crate::graph::{Node, NodeId};
use crate::ops::activation::{relu::relu_backward, tanh::tanh_backward};
use crate::ops::arithmetic::{add::add_backward, mul::mul_backward, pow::pow_backward};

/// Operator that produced a node, together with its operand ids.
///
/// The backward pass matches on this tag to pick the local derivative rule,
/// so every rule's data dependencies are visible here: the operand ids, the
/// constant exponent for `Pow`, and the node's own value and gradient.
///
/// Negation, subtraction and division have no variant of their own; they are
/// composed from `Mul`, `Add` and `Pow` when the graph is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    /// Leaf node: an input, a parameter or a promoted constant.
    Leaf,
    Add([NodeId; 2]),
    Mul([NodeId; 2]),
    /// `base ** exponent` with a constant exponent.
    Pow { base: NodeId, exponent: f64 },
    Tanh(NodeId),
    Relu(NodeId),
}

impl Op {
    /// Operand ids, in the order they were passed to the operation.
    pub fn operands(&self) -> &[NodeId] {
        match self {
            Op::Leaf => &[],
            Op::Add(operands) | Op::Mul(operands) => operands,
            Op::Pow { base, .. } => std::slice::from_ref(base),
            Op::Tanh(input) | Op::Relu(input) => std::slice::from_ref(input),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Op::Leaf)
    }

    /// Short operator label: `+`, `*`, `**k`, `tanh`, `relu`, or empty for leaves.
    pub fn symbol(&self) -> String {
        match self {
            Op::Leaf => String::new(),
            Op::Add(_) => "+".to_string(),
            Op::Mul(_) => "*".to_string(),
            Op::Pow { exponent, .. } => format!("**{}", exponent),
            Op::Tanh(_) => "tanh".to_string(),
            Op::Relu(_) => "relu".to_string(),
        }
    }

    /// Runs the local derivative rule of node `output`, adding its contribution
    /// into the gradients of its operands.
    ///
    /// Must only be called once every consumer of `output` has already run.
    pub(crate) fn propagate(&self, nodes: &mut [Node], output: NodeId) {
        let (output_value, grad_output) = {
            let node = &nodes[output.index()];
            (node.value, node.grad)
        };
        match *self {
            Op::Leaf => {}
            Op::Add(operands) => add_backward(nodes, operands, grad_output),
            Op::Mul(operands) => mul_backward(nodes, operands, grad_output),
            Op::Pow { base, exponent } => pow_backward(nodes, base, exponent, grad_output),
            Op::Tanh(input) => tanh_backward(nodes, input, output_value, grad_output),
            Op::Relu(input) => relu_backward(nodes, input, grad_output),
        }
    }
}
