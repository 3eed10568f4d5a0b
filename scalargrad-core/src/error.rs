use crate::graph::NodeId;
use thiserror::Error;

/// Custom error type for the scalargrad engine.
///
/// Every variant is raised while the graph is being built. Traversals
/// (`backward`, `zero_grad`) walk an already well-formed graph and cannot fail.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum ScalarGradError {
    #[error("Invalid exponent for power: expected a finite numeric constant, got {found}")]
    InvalidExponent { found: String },

    #[error("Operand of '{operation}' belongs to a different graph")]
    ForeignNode { operation: String },

    #[error("Unknown node {id:?}: graph holds {len} nodes")]
    UnknownNode { id: NodeId, len: usize },

    #[error("Invalid distribution parameters: {0}")]
    InvalidDistribution(String),
}
