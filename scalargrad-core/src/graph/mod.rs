// src/graph/mod.rs

use crate::autograd::Op;
use crate::error::ScalarGradError;
use crate::value::Value;
use std::cell::{Ref, RefCell, RefMut};

pub mod create;

/// Stable identifier of a node inside its [`Graph`].
///
/// Identity of a node is identity of its index: two nodes holding the same
/// numeric value are still distinct nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// One scalar of the computation graph.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) value: f64,
    pub(crate) grad: f64,
    pub(crate) op: Op,
    pub(crate) label: Option<String>,
}

impl Node {
    pub(crate) fn new(value: f64, op: Op) -> Self {
        Node {
            value,
            grad: 0.0,
            op,
            label: None,
        }
    }
}

/// Arena owning every node of one computation.
///
/// `Graph` uses a `RefCell<Vec<Node>>` internally so that operations can append
/// nodes through a shared reference while [`Value`] handles borrow the graph.
/// Nodes are never removed; the whole arena is freed when the `Graph` is dropped.
///
/// The `RefCell` also makes `Graph` `!Sync`: a traversal always has exclusive
/// access to the nodes it walks.
#[derive(Debug, Default)]
pub struct Graph {
    nodes: RefCell<Vec<Node>>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Graph::default()
    }

    /// Creates an empty graph with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Graph {
            nodes: RefCell::new(Vec::with_capacity(capacity)),
        }
    }

    /// Number of nodes recorded so far.
    pub fn len(&self) -> usize {
        self.nodes.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.borrow().is_empty()
    }

    /// Returns a handle to the node `id`, or `UnknownNode` if the arena holds no such node.
    pub fn get(&self, id: NodeId) -> Result<Value<'_>, ScalarGradError> {
        let len = self.len();
        if id.index() >= len {
            return Err(ScalarGradError::UnknownNode { id, len });
        }
        Ok(Value::new(self, id))
    }

    /// Appends a node and returns its id.
    pub(crate) fn push(&self, value: f64, op: Op) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        let id = NodeId(nodes.len());
        // Operands always precede their consumers, which keeps the graph acyclic.
        debug_assert!(op.operands().iter().all(|operand| operand.index() < id.index()));
        nodes.push(Node::new(value, op));
        id
    }

    pub(crate) fn nodes(&self) -> Ref<'_, Vec<Node>> {
        self.nodes.borrow()
    }

    pub(crate) fn nodes_mut(&self) -> RefMut<'_, Vec<Node>> {
        self.nodes.borrow_mut()
    }

    /// True if `value` is a handle into this very graph.
    pub(crate) fn owns(&self, value: &Value<'_>) -> bool {
        std::ptr::eq(self, value.graph())
    }
}
