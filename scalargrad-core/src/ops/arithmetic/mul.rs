// scalargrad-core/src/ops/arithmetic/mul.rs

use crate::autograd::BackwardOp;
use crate::node::Node;
use crate::operand::Operand;

/// Multiplies two operands.
///
/// Forward: \( out = a \cdot b \). Backward: each operand receives the output
/// gradient scaled by the *other* operand's value:
/// \\[ \frac{dL}{da} \mathrel{+}= b \cdot \frac{dL}{dout}, \quad \frac{dL}{db} \mathrel{+}= a \cdot \frac{dL}{dout} \\]
pub fn mul_op(a: impl Into<Operand>, b: impl Into<Operand>) -> Node {
    let lhs = a.into().into_node();
    let rhs = b.into().into_node();
    let value = lhs.value() * rhs.value();
    Node::from_op(value, BackwardOp::Mul { lhs, rhs })
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
