// scalargrad-core/src/ops/arithmetic/div.rs

use crate::node::Node;
use crate::operand::Operand;
use crate::ops::arithmetic::mul_op;
use crate::ops::arithmetic::pow::pow_node;

/// Divides `a` by `b`, expressed as `a * b^-1`.
///
/// The divisor may be a node: only the exponent of the intermediate power
/// must be constant, and `-1` always is. Gradients:
/// \\[ \frac{dL}{da} = \frac{1}{b} \frac{dL}{dout}, \quad \frac{dL}{db} = -\frac{a}{b^2} \frac{dL}{dout} \\]
///
/// # Domain Considerations
/// Division by zero is not trapped; the value and gradients become infinite or NaN.
pub fn div_op(a: impl Into<Operand>, b: impl Into<Operand>) -> Node {
    let reciprocal = pow_node(b.into().into_node(), -1.0);
    mul_op(a, reciprocal)
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
