// src/operand.rs

use crate::node::Node;

/// Argument accepted by every operator: either an existing graph node or a
/// bare numeric constant.
///
/// Constants are lifted into a fresh leaf node by [`Operand::into_node`], once,
/// at the operator boundary. Gradient rules only ever see nodes.
#[derive(Debug, Clone)]
pub enum Operand {
    Node(Node),
    Constant(f64),
}

impl Operand {
    /// Returns the node behind this operand, creating a constant leaf if needed.
    pub fn into_node(self) -> Node {
        match self {
            Operand::Node(node) => node,
            Operand::Constant(value) => Node::new(value),
        }
    }

    /// Forward value carried by the operand.
    pub fn value(&self) -> f64 {
        match self {
            Operand::Node(node) => node.value(),
            Operand::Constant(value) => *value,
        }
    }
}

impl From<Node> for Operand {
    fn from(node: Node) -> Self {
        Operand::Node(node)
    }
}

impl From<&Node> for Operand {
    fn from(node: &Node) -> Self {
        Operand::Node(node.clone())
    }
}

macro_rules! impl_from_numeric {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Operand {
                fn from(value: $t) -> Self {
                    Operand::Constant(value as f64)
                }
            }
        )*
    };
}

impl_from_numeric!(f64, f32, i32, i64, u32, usize);
