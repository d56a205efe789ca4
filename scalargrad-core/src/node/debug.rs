// src/node/debug.rs
use crate::node::Node;
use std::fmt;

impl fmt::Display for Node {
    /// `Node(value=-8.0)`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node(value={:?})", self.value())
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node(value={:?}, grad={:?}", self.value(), self.grad())?;
        if !self.is_leaf() {
            write!(f, ", op={}", self.op_tag())?;
        }
        if let Some(label) = self.data.label.borrow().as_deref() {
            write!(f, ", label={:?}", label)?;
        }
        write!(f, ")")
    }
}
