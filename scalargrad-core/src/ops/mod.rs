//! # Scalar Operations Module (`ops`)
//!
//! The operator library of the engine. Operations are grouped by family:
//!
//! - [`arithmetic`]: `add`, `mul`, `pow` and the composites `neg`, `sub`, `div`.
//! - [`math_elem`]: `tanh` and `exp`.
//!
//! Each operation has a core `xxx_op` function that
//! 1. lifts numeric constants into leaves ([`Operand::into_node`](crate::operand::Operand::into_node)),
//! 2. computes the forward value,
//! 3. returns one new [`Node`](crate::node::Node) whose
//!    [`BackwardOp`](crate::autograd::BackwardOp) records the operands.
//!
//! Operands are never mutated. The operator overloads and the `Node` methods
//! (`pow`, `tanh`, `exp`) are thin wrappers over these functions.

pub mod arithmetic;
pub mod math_elem;

pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
pub use math_elem::{exp_op, tanh_op};
