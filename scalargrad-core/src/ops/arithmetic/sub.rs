use crate::node::Node;
use crate::operand::Operand;
use crate::ops::arithmetic::{add_op, neg_op};

/// Subtracts `b` from `a`, expressed as `a + (-b)`.
///
/// The gradient flows through the `+` node and the `*` node of the negation,
/// so `a` receives the output gradient and `b` its opposite.
pub fn sub_op(a: impl Into<Operand>, b: impl Into<Operand>) -> Node {
    add_op(a, neg_op(b))
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
