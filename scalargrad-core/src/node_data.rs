// src/node_data.rs
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::autograd::BackwardOp;

/// Internal storage and metadata for a [`Node`](crate::node::Node).
///
/// `value` and `grad_fn` are fixed once the node is built. Only `grad` changes
/// afterwards, and only while a backward pass runs. The label is a pure
/// diagnostic and may be attached late.
#[derive(Debug)]
pub struct NodeData {
    /// Forward value computed when the node was constructed.
    pub(crate) value: f64,
    /// Accumulated gradient of the last backward root with respect to this node.
    pub(crate) grad: Cell<f64>,
    /// The operation that produced this node, carrying its operands.
    /// Leaves (inputs and lifted constants) have `grad_fn = None`.
    pub(crate) grad_fn: Option<BackwardOp>,
    /// Optional human-readable name.
    pub(crate) label: RefCell<Option<String>>,
}

impl NodeData {
    pub(crate) fn new(value: f64, grad_fn: Option<BackwardOp>, label: Option<String>) -> Self {
        NodeData {
            value,
            grad: Cell::new(0.0),
            grad_fn,
            label: RefCell::new(label),
        }
    }

    /// Adds `delta` to the stored gradient.
    pub(crate) fn acc_grad(&self, delta: f64) {
        self.grad.set(self.grad.get() + delta);
    }
}

impl Drop for NodeData {
    /// Unlinks the operand chain iteratively. The default recursive drop
    /// overflows the stack on graphs that are tens of thousands of
    /// operations deep.
    fn drop(&mut self) {
        let mut pending = match self.grad_fn.take() {
            Some(op) => op.into_inputs(),
            None => return,
        };
        while let Some(node) = pending.pop() {
            // Shared operands are still owned elsewhere and are left alone.
            if let Ok(mut data) = Rc::try_unwrap(node.data) {
                if let Some(op) = data.grad_fn.take() {
                    pending.extend(op.into_inputs());
                }
            }
        }
    }
}
