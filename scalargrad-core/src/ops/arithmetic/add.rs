// scalargrad-core/src/ops/arithmetic/add.rs

use crate::autograd::BackwardOp;
use crate::node::Node;
use crate::operand::Operand;

/// Adds two operands.
///
/// Forward: \( out = a + b \). Backward: both operands receive the output
/// gradient unchanged (\( \frac{dout}{da} = \frac{dout}{db} = 1 \)).
///
/// Either side may be a numeric constant; it is lifted into a leaf.
pub fn add_op(a: impl Into<Operand>, b: impl Into<Operand>) -> Node {
    let lhs = a.into().into_node();
    let rhs = b.into().into_node();
    let value = lhs.value() + rhs.value();
    Node::from_op(value, BackwardOp::Add { lhs, rhs })
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
