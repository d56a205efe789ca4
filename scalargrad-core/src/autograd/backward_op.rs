use std::fmt;

use crate::node::Node;

/// Local derivative rule of a non-leaf node.
///
/// Each variant carries the operands that were consumed during the forward
/// pass, so the operand arity of an operation is fixed by its variant. The
/// rule is only ever replayed by the backward pass, once the gradient of the
/// output node is fully accumulated.
#[derive(Clone)]
pub enum BackwardOp {
    /// `out = lhs + rhs`
    Add { lhs: Node, rhs: Node },
    /// `out = lhs * rhs`
    Mul { lhs: Node, rhs: Node },
    /// `out = base ^ exponent`, with a constant exponent.
    Pow { base: Node, exponent: f64 },
    /// `out = tanh(input)`
    Tanh { input: Node },
    /// `out = exp(input)`
    Exp { input: Node },
}

impl BackwardOp {
    /// Distributes the gradient of `output` to the operands of this operation.
    ///
    /// Using the chain rule \( \frac{dL}{da} \mathrel{+}= \frac{dL}{dout} \cdot \frac{dout}{da} \),
    /// every operand receives its contribution. Contributions are added, never
    /// assigned, so an operand used twice (e.g. `x + x`) sums both paths.
    ///
    /// `output.grad()` is read here, at replay time.
    pub(crate) fn backward(&self, output: &Node) {
        let grad_output = output.grad();
        match self {
            BackwardOp::Add { lhs, rhs } => {
                lhs.acc_grad(grad_output);
                rhs.acc_grad(grad_output);
            }
            BackwardOp::Mul { lhs, rhs } => {
                lhs.acc_grad(rhs.value() * grad_output);
                rhs.acc_grad(lhs.value() * grad_output);
            }
            BackwardOp::Pow { base, exponent } => {
                let local = exponent * base.value().powf(exponent - 1.0);
                base.acc_grad(local * grad_output);
            }
            BackwardOp::Tanh { input } => {
                let t = output.value();
                input.acc_grad((1.0 - t * t) * grad_output);
            }
            BackwardOp::Exp { input } => {
                // d/dx e^x = e^x, which is the output value itself.
                input.acc_grad(output.value() * grad_output);
            }
        }
    }

    /// Returns the operands consumed by this operation, in forward order.
    pub fn inputs(&self) -> Vec<&Node> {
        match self {
            BackwardOp::Add { lhs, rhs } | BackwardOp::Mul { lhs, rhs } => vec![lhs, rhs],
            BackwardOp::Pow { base, .. } => vec![base],
            BackwardOp::Tanh { input } | BackwardOp::Exp { input } => vec![input],
        }
    }

    /// Consumes the operation, handing back ownership of its operands.
    pub(crate) fn into_inputs(self) -> Vec<Node> {
        match self {
            BackwardOp::Add { lhs, rhs } | BackwardOp::Mul { lhs, rhs } => vec![lhs, rhs],
            BackwardOp::Pow { base, .. } => vec![base],
            BackwardOp::Tanh { input } | BackwardOp::Exp { input } => vec![input],
        }
    }

    /// Diagnostic label of the operation: `+`, `*`, `**k`, `tanh` or `exp`.
    pub fn tag(&self) -> String {
        match self {
            BackwardOp::Add { .. } => "+".to_string(),
            BackwardOp::Mul { .. } => "*".to_string(),
            BackwardOp::Pow { exponent, .. } => format!("**{}", exponent),
            BackwardOp::Tanh { .. } => "tanh".to_string(),
            BackwardOp::Exp { .. } => "exp".to_string(),
        }
    }
}

impl fmt::Debug for BackwardOp {
    /// Operands are printed by value only; walking the whole subgraph would
    /// make the output unreadable for large graphs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operand_values: Vec<f64> = self.inputs().iter().map(|n| n.value()).collect();
        write!(f, "BackwardOp({}, operands={:?})", self.tag(), operand_values)
    }
}
