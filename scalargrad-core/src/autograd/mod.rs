//! # Automatic Differentiation (`autograd`)
//!
//! Reverse-mode differentiation over scalar graphs.
//!
//! - [`BackwardOp`]: the local derivative rule stored in every non-leaf node.
//! - [`graph::topological_sort`]: post-order ordering of a graph from its root.
//! - [`grad_check`]: finite-difference verification of analytic gradients.
//!
//! The backward pass itself is exposed as [`Node::backward`](crate::node::Node::backward).

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::BackwardOp;
pub use grad_check::{check_grad, numerical_gradient, GradCheckConfig, GradCheckError};
pub use graph::{topological_sort, NodeId};
