use thiserror::Error;

/// Custom error type for the scalargrad engine.
///
/// Every variant is raised synchronously by the operator that received the
/// offending argument. Numerical-domain conditions (division by zero, `0^-1`,
/// `exp` overflow) are not errors: they follow IEEE semantics and show up as
/// infinities or NaN in the node values.
#[derive(Error, Debug, PartialEq, Clone)]
pub enum ScalarGradError {
    #[error("Exponent of operation {operation} must be a numeric constant, got a graph node")]
    NonConstantExponent { operation: String },

    #[error("Invalid operand for operation {operation}: {reason}")]
    InvalidOperand { operation: String, reason: String },
}
