use crate::error::ScalarGradError;
use crate::node::Node;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(ScalarGradError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: f(x+eps): {value_plus:?}, f(x-eps): {value_minus:?}")]
    NumericalGradNonFinite {
        input_index: usize,
        value_plus: f64,
        value_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNonFinite { input_index: usize, value: f64 },
    #[error("Gradient check needs at least one input value")]
    EmptyInput,
}

impl From<ScalarGradError> for GradCheckError {
    fn from(err: ScalarGradError) -> Self {
        GradCheckError::ForwardPassError(err)
    }
}

/// Tunables of [`check_grad`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradCheckConfig {
    /// Half-width of the centered finite-difference step.
    pub epsilon: f64,
    /// Accepted absolute or relative gap between analytical and numerical gradients.
    pub tolerance: f64,
}

impl Default for GradCheckConfig {
    fn default() -> Self {
        GradCheckConfig {
            epsilon: 1e-6,
            tolerance: 1e-4,
        }
    }
}

fn leaves(point: &[f64]) -> Vec<Node> {
    point.iter().map(|&v| Node::new(v)).collect()
}

/// Computes \( \frac{\partial f}{\partial x_i} \) at `point` with centered finite differences.
///
/// `func` receives fresh leaf nodes for every evaluation and only its output
/// value is read, so no backward pass is involved.
pub fn numerical_gradient<F>(func: F, point: &[f64], epsilon: f64) -> Result<Vec<f64>, GradCheckError>
where
    F: Fn(&[Node]) -> Result<Node, ScalarGradError>,
{
    let mut grads = Vec::with_capacity(point.len());
    let mut perturbed = point.to_vec();

    for i in 0..point.len() {
        perturbed[i] = point[i] + epsilon;
        let value_plus = func(&leaves(&perturbed))?.value();

        perturbed[i] = point[i] - epsilon;
        let value_minus = func(&leaves(&perturbed))?.value();

        perturbed[i] = point[i];

        let grad = (value_plus - value_minus) / (2.0 * epsilon);
        if !grad.is_finite() {
            return Err(GradCheckError::NumericalGradNonFinite {
                input_index: i,
                value_plus,
                value_minus,
            });
        }
        grads.push(grad);
    }

    Ok(grads)
}

/// Checks analytical gradients against numerical gradients using finite differences.
///
/// Builds one leaf per entry of `point`, runs `func` and a backward pass from
/// its output, then compares every leaf gradient with the centered difference
/// estimate. Returns the analytical gradients when all of them agree.
pub fn check_grad<F>(func: F, point: &[f64], config: &GradCheckConfig) -> Result<Vec<f64>, GradCheckError>
where
    F: Fn(&[Node]) -> Result<Node, ScalarGradError>,
{
    if point.is_empty() {
        return Err(GradCheckError::EmptyInput);
    }

    let inputs = leaves(point);
    let output = func(&inputs)?;
    output.backward();
    let analytical: Vec<f64> = inputs.iter().map(Node::grad).collect();

    let numerical = numerical_gradient(&func, point, config.epsilon)?;

    for (input_index, (&analytical_grad, &numerical_grad)) in
        analytical.iter().zip(numerical.iter()).enumerate()
    {
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNonFinite {
                input_index,
                value: analytical_grad,
            });
        }
        let close = approx::relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = config.tolerance,
            max_relative = config.tolerance
        );
        if !close {
            let difference = (analytical_grad - numerical_grad).abs();
            log::debug!(
                "check_grad: input {} analytical={} numerical={} diff={}",
                input_index,
                analytical_grad,
                numerical_grad,
                difference
            );
            return Err(GradCheckError::GradientMismatch {
                input_index,
                analytical_grad,
                numerical_grad,
                difference,
            });
        }
    }

    Ok(analytical)
}
