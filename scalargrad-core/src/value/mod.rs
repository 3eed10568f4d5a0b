// src/value/mod.rs

use crate::autograd::Op;
use crate::graph::{Graph, NodeId};

mod autograd_methods;
mod traits;

/// Handle to one scalar node of a [`Graph`].
///
/// `Value` is a `(graph, id)` pair: it is `Copy`, borrows the graph for `'g`,
/// and reads the node through the graph on every access. Arithmetic on values
/// (`+`, `-`, `*`, `/`, unary `-`, [`pow`](Value::pow), [`tanh`](Value::tanh),
/// [`relu`](Value::relu)) appends new nodes to the same graph.
///
/// Equality is node identity, not numeric equality.
#[derive(Clone, Copy)]
pub struct Value<'g> {
    graph: &'g Graph,
    id: NodeId,
}

impl<'g> Value<'g> {
    pub(crate) fn new(graph: &'g Graph, id: NodeId) -> Self {
        Value { graph, id }
    }

    /// The graph this node lives in.
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Forward-computed scalar.
    pub fn value(&self) -> f64 {
        self.graph.nodes()[self.id.index()].value
    }

    /// Accumulated `d(output)/d(self)` of the most recent traversals.
    pub fn grad(&self) -> f64 {
        self.graph.nodes()[self.id.index()].grad
    }

    /// Operator that produced this node.
    pub fn op(&self) -> Op {
        self.graph.nodes()[self.id.index()].op
    }

    /// Operator label, see [`Op::symbol`].
    pub fn op_symbol(&self) -> String {
        self.op().symbol()
    }

    pub fn is_leaf(&self) -> bool {
        self.op().is_leaf()
    }

    /// Handles to the operands, in construction order.
    pub fn operands(&self) -> Vec<Value<'g>> {
        self.op()
            .operands()
            .iter()
            .map(|&id| Value::new(self.graph, id))
            .collect()
    }

    pub fn label(&self) -> Option<String> {
        self.graph.nodes()[self.id.index()].label.clone()
    }

    /// Attaches a human-readable name. Purely informational.
    pub fn set_label(&self, label: impl Into<String>) {
        self.graph.nodes_mut()[self.id.index()].label = Some(label.into());
    }
}
