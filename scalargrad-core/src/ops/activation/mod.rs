//! # Activation Functions
//!
//! Non-linearities for scalar neurons.
//!
//! ## Currently Implemented:
//! - [`tanh`](tanh/fn.tanh_op.html): hyperbolic tangent.
//! - [`relu`](relu/fn.relu_op.html): Rectified Linear Unit.

pub mod relu;
pub mod tanh;

// Re-export key functions
pub use relu::relu_op;
pub use tanh::tanh_op;
