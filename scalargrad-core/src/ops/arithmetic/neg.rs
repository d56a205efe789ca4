use crate::node::Node;
use crate::operand::Operand;
use crate::ops::arithmetic::mul_op;

/// Negates an operand, expressed as `a * -1`.
///
/// No dedicated derivative rule: the gradient flows through the `*` node.
pub fn neg_op(a: impl Into<Operand>) -> Node {
    mul_op(a, -1.0_f64)
}
