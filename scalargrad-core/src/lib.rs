//! # scalargrad-core
//!
//! A scalar reverse-mode automatic differentiation engine.
//!
//! Operations on [`Value`] handles record a directed acyclic graph inside a
//! [`Graph`] arena. Calling [`Value::backward`] on an output walks that graph in
//! reverse topological order and accumulates `d(output)/d(node)` into every
//! reachable node.
//!
//! ```
//! use scalargrad_core::Graph;
//!
//! let graph = Graph::new();
//! let a = graph.leaf(2.0, "a");
//! let b = graph.leaf(3.0, "b");
//! let c = a * b + b.pow(2.0);
//! c.backward();
//!
//! assert_eq!(c.value(), 15.0);
//! assert_eq!(a.grad(), 3.0);
//! assert_eq!(b.grad(), 8.0);
//! ```

pub mod autograd;
pub mod error;
pub mod graph;
pub mod ops;
pub mod utils;
pub mod value;

// Re-export the main types so they are reachable as `scalargrad_core::Value` etc.
pub use autograd::{check_grad, GradCheckConfig, GradCheckError, Op};
pub use error::ScalarGradError;
pub use graph::{Graph, NodeId};
pub use ops::Operand;
pub use value::Value;
