// scalargrad-core/src/ops/arithmetic/pow_test.rs

use crate::error::ScalarGradError;
use crate::node::node;
use crate::ops::arithmetic::pow_op;
use approx::assert_relative_eq;

#[test]
fn test_pow_forward() -> Result<(), ScalarGradError> {
    let out = pow_op(&node(2.0), 3_i32)?;
    assert_relative_eq!(out.value(), 8.0);
    assert_eq!(out.op_tag(), "**3");
    assert_eq!(out.operands().len(), 1);
    Ok(())
}

#[test]
fn test_pow_backward() -> Result<(), ScalarGradError> {
    // d(x^3)/dx = 3x^2
    let x = node(2.0);
    let out = pow_op(&x, 3.0_f64)?;
    out.backward();
    assert_relative_eq!(x.grad(), 12.0);
    Ok(())
}

#[test]
fn test_pow_fractional_exponent() -> Result<(), ScalarGradError> {
    // d(sqrt(x))/dx = 1 / (2 sqrt(x))
    let x = node(4.0);
    let out = pow_op(&x, 0.5_f64)?;
    assert_relative_eq!(out.value(), 2.0);
    out.backward();
    assert_relative_eq!(x.grad(), 0.25);
    Ok(())
}

#[test]
fn test_pow_rejects_node_exponent() {
    let x = node(2.0);
    let k = node(3.0);
    let result = pow_op(&x, &k);
    assert_eq!(
        result.unwrap_err(),
        ScalarGradError::NonConstantExponent {
            operation: "pow_op".to_string()
        }
    );
}

#[test]
fn test_pow_rejects_non_finite_exponent() {
    let x = node(2.0);
    assert!(matches!(
        pow_op(&x, f64::NAN),
        Err(ScalarGradError::InvalidOperand { .. })
    ));
    assert!(matches!(
        pow_op(&x, f64::INFINITY),
        Err(ScalarGradError::InvalidOperand { .. })
    ));
}

#[test]
fn test_pow_negative_exponent_at_zero() -> Result<(), ScalarGradError> {
    let x = node(0.0);
    let out = pow_op(&x, -1.0_f64)?;
    assert!(out.value().is_infinite());
    out.backward();
    assert!(x.grad().is_infinite());
    Ok(())
}

#[test]
fn test_pow_method_matches_op() {
    let x = node(1.5);
    assert_relative_eq!(x.pow(2.0).value(), 2.25);
    assert_eq!(x.pow(-1.0).op_tag(), "**-1");
}
