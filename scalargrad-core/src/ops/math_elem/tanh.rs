// scalargrad-core/src/ops/math_elem/tanh.rs

use crate::autograd::BackwardOp;
use crate::node::Node;
use crate::operand::Operand;

/// Computes the hyperbolic tangent of an operand.
///
/// Forward: \( t = \tanh(a) \), evaluated with `f64::tanh`, which saturates
/// to ±1 instead of overflowing for large magnitudes. Backward:
/// \\[ \frac{dL}{da} \mathrel{+}= (1 - t^2) \cdot \frac{dL}{dout} \\]
/// where `t` is read back from the output node.
pub fn tanh_op(a: impl Into<Operand>) -> Node {
    let input = a.into().into_node();
    let value = input.value().tanh();
    Node::from_op(value, BackwardOp::Tanh { input })
}

impl Node {
    /// Hyperbolic tangent of this node. See [`tanh_op`].
    pub fn tanh(&self) -> Node {
        tanh_op(self)
    }
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
