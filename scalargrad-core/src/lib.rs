//! # scalargrad-core - Scalar reverse-mode automatic differentiation
//!
//! Builds a computation graph out of scalar operations and computes, in a
//! single backward pass, the gradient of one output with respect to every
//! node that contributed to it.
//!
//! ```
//! use scalargrad_core::node;
//!
//! let a = node(2.0);
//! let b = node(-3.0);
//! let c = node(10.0);
//! let f = node(-2.0);
//! let l = (&a * &b + &c) * &f;
//! assert_eq!(l.value(), -8.0);
//!
//! l.backward();
//! assert_eq!(a.grad(), 6.0);
//! assert_eq!(b.grad(), -4.0);
//! assert_eq!(f.grad(), 4.0);
//! ```
//!
//! ## Supported Operations
//!
//! | Category | Operations |
//! |----------|------------|
//! | Arithmetic | `+`, `-`, `*`, `/`, unary `-` ([`ops::arithmetic`]) |
//! | Power | [`Node::pow`], [`ops::pow_op`] (constant exponent) |
//! | Transcendental | [`Node::tanh`], [`Node::exp`] ([`ops::math_elem`]) |
//!
//! ## Architecture
//!
//! - [`Node`]: reference-counted handle to a graph vertex. Cloning is O(1).
//! - [`autograd::BackwardOp`]: the local derivative rule of each non-leaf node.
//! - [`topological_sort`]: evaluation order for the backward pass.
//! - [`Node::backward`]: resets, seeds and propagates gradients.
//! - [`check_grad`]: finite-difference validation of gradients.

pub mod autograd;
pub mod node;
pub mod node_data;
pub mod operand;
pub mod ops;
pub mod utils;

pub mod error;
pub use error::ScalarGradError;

pub use autograd::{check_grad, numerical_gradient, topological_sort, GradCheckConfig, GradCheckError};
pub use node::{labeled_node, node, Node};
pub use operand::Operand;
pub use ops::{add_op, div_op, exp_op, mul_op, neg_op, pow_op, sub_op, tanh_op};
// Re-export traits required by public impls
pub use num_traits;
