//! # Autograd
//!
//! Reverse-mode differentiation over a [`Graph`](crate::graph::Graph).
//!
//! - [`Op`] tags every node with the operator that produced it and its operand ids.
//!   The local derivative rule for each tag lives next to the forward computation
//!   in [`crate::ops`].
//! - `graph` computes the visitation orders (topological sort, reachable set).
//! - `backward` drives a traversal: seed, then replay the rules consumers-first.
//! - [`grad_check`] validates analytical gradients against finite differences.

pub(crate) mod backward;
pub mod grad_check;
pub(crate) mod graph;
pub mod op;

pub use grad_check::{check_grad, GradCheckConfig, GradCheckError};
pub use op::Op;
