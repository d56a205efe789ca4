// scalargrad-core/src/ops/arithmetic/pow.rs

use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::node::Node;
use crate::operand::Operand;

/// Raises `base` to a constant `exponent`.
///
/// Forward: \( out = a^k \). Backward:
/// \\[ \frac{dL}{da} \mathrel{+}= k \cdot a^{k-1} \cdot \frac{dL}{dout} \\]
///
/// # Errors
/// * `NonConstantExponent` if `exponent` is a graph node. Differentiating with
///   respect to an exponent is not supported.
/// * `InvalidOperand` if `exponent` is NaN or infinite.
///
/// # Domain Considerations
/// Negative exponents have a pole at `a = 0`. Nothing is trapped there: the
/// forward value and the gradient become infinite or NaN.
pub fn pow_op(
    base: impl Into<Operand>,
    exponent: impl Into<Operand>,
) -> Result<Node, ScalarGradError> {
    let exponent = match exponent.into() {
        Operand::Constant(k) => k,
        Operand::Node(_) => {
            return Err(ScalarGradError::NonConstantExponent {
                operation: "pow_op".to_string(),
            })
        }
    };
    if !exponent.is_finite() {
        return Err(ScalarGradError::InvalidOperand {
            operation: "pow_op".to_string(),
            reason: format!("exponent must be finite, got {}", exponent),
        });
    }
    Ok(pow_node(base.into().into_node(), exponent))
}

pub(crate) fn pow_node(base: Node, exponent: f64) -> Node {
    let value = base.value().powf(exponent);
    Node::from_op(value, BackwardOp::Pow { base, exponent })
}

// --- Node Method ---

impl Node {
    /// Raises this node to a constant power.
    ///
    /// Unlike [`pow_op`] the exponent is an `f64` by type, so no check is
    /// needed; non-finite exponents follow IEEE semantics.
    pub fn pow(&self, exponent: f64) -> Node {
        pow_node(self.clone(), exponent)
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
