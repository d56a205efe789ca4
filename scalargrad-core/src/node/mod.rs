// src/node/mod.rs

use crate::autograd::{BackwardOp, NodeId};
use crate::node_data::NodeData;
use std::rc::Rc;

mod autograd_methods;
pub mod create;
mod debug;
mod traits;

pub use create::{labeled_node, node};

/// A scalar vertex of the computation graph.
///
/// `Node` uses `Rc<NodeData>` internally:
/// 1.  **Shared Ownership:** every downstream node that consumed this one holds
///     a clone of the handle, so cloning is a reference-count bump.
/// 2.  **Interior Mutability:** only the gradient (a `Cell<f64>`) and the
///     diagnostic label can change after construction.
///
/// `Rc` makes `Node` neither `Send` nor `Sync`: graphs are built and
/// differentiated on a single thread.
pub struct Node {
    pub(crate) data: Rc<NodeData>,
}

impl Node {
    /// Creates a leaf node (an input, parameter or constant).
    pub fn new(value: f64) -> Self {
        Node {
            data: Rc::new(NodeData::new(value, None, None)),
        }
    }

    /// Creates a leaf node with a diagnostic label.
    pub fn with_label(value: f64, label: impl Into<String>) -> Self {
        Node {
            data: Rc::new(NodeData::new(value, None, Some(label.into()))),
        }
    }

    /// Creates the output node of an operation. Only the operator library
    /// builds non-leaf nodes, and always from operands that already exist.
    pub(crate) fn from_op(value: f64, grad_fn: BackwardOp) -> Self {
        Node {
            data: Rc::new(NodeData::new(value, Some(grad_fn), None)),
        }
    }

    /// Returns the forward value.
    pub fn value(&self) -> f64 {
        self.data.value
    }

    /// Returns the gradient accumulated by the last backward pass that reached
    /// this node, `0.0` if none did.
    pub fn grad(&self) -> f64 {
        self.data.grad.get()
    }

    pub(crate) fn acc_grad(&self, delta: f64) {
        self.data.acc_grad(delta);
    }

    pub(crate) fn set_grad(&self, grad: f64) {
        self.data.grad.set(grad);
    }

    /// Returns a clone of the diagnostic label, if any.
    pub fn label(&self) -> Option<String> {
        self.data.label.borrow().clone()
    }

    /// Attaches or replaces the diagnostic label.
    pub fn set_label(&self, label: impl Into<String>) {
        *self.data.label.borrow_mut() = Some(label.into());
    }

    /// Returns the operation that produced this node (`None` for leaves).
    pub fn grad_fn(&self) -> Option<&BackwardOp> {
        self.data.grad_fn.as_ref()
    }

    /// Diagnostic operator tag; empty for leaves.
    pub fn op_tag(&self) -> String {
        self.grad_fn().map(BackwardOp::tag).unwrap_or_default()
    }

    /// Returns the operands consumed to produce this node, in forward order.
    pub fn operands(&self) -> Vec<Node> {
        match self.grad_fn() {
            Some(op) => op.inputs().into_iter().cloned().collect(),
            None => Vec::new(),
        }
    }

    /// Checks if this node has no operands.
    pub fn is_leaf(&self) -> bool {
        self.data.grad_fn.is_none()
    }

    /// Returns the identity of this node within the graph.
    pub fn node_id(&self) -> NodeId {
        Rc::as_ptr(&self.data)
    }

    /// Checks whether both handles point to the same node.
    pub fn ptr_eq(&self, other: &Node) -> bool {
        Rc::ptr_eq(&self.data, &other.data)
    }
}
