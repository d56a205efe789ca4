// scalargrad-core/src/ops/math_elem/exp.rs

use crate::autograd::BackwardOp;
use crate::node::Node;
use crate::operand::Operand;

/// Computes \( e^a \).
///
/// Backward: \( \frac{dL}{da} \mathrel{+}= e^a \cdot \frac{dL}{dout} \), using
/// the output value. Like every other operation the rule is only run by the
/// backward pass.
///
/// # Domain Considerations
/// Overflows to `+inf` for inputs above roughly 709.78; this is not trapped.
pub fn exp_op(a: impl Into<Operand>) -> Node {
    let input = a.into().into_node();
    let value = input.value().exp();
    Node::from_op(value, BackwardOp::Exp { input })
}

impl Node {
    /// Exponential of this node. See [`exp_op`].
    pub fn exp(&self) -> Node {
        exp_op(self)
    }
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
