// src/node/traits.rs

use crate::node::Node;
use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, sub_op};
use num_traits::{One, Zero};
use std::iter::{Product, Sum};
use std::rc::Rc;

// --- Trait Implementations ---

impl Clone for Node {
    /// Shallow clone: both handles refer to the same graph node.
    fn clone(&self) -> Self {
        Node {
            data: Rc::clone(&self.data),
        }
    }
}

// --- Operator overloads ---
//
// Every combination of owned node, borrowed node and `f64` is accepted on
// either side. They all funnel into the `_op` functions, which lift constants.

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op_fn:ident) => {
        impl std::ops::$trait<Node> for Node {
            type Output = Node;
            fn $method(self, rhs: Node) -> Node {
                $op_fn(self, rhs)
            }
        }

        impl std::ops::$trait<&Node> for Node {
            type Output = Node;
            fn $method(self, rhs: &Node) -> Node {
                $op_fn(self, rhs)
            }
        }

        impl std::ops::$trait<Node> for &Node {
            type Output = Node;
            fn $method(self, rhs: Node) -> Node {
                $op_fn(self, rhs)
            }
        }

        impl std::ops::$trait<&Node> for &Node {
            type Output = Node;
            fn $method(self, rhs: &Node) -> Node {
                $op_fn(self, rhs)
            }
        }

        impl std::ops::$trait<f64> for Node {
            type Output = Node;
            fn $method(self, rhs: f64) -> Node {
                $op_fn(self, rhs)
            }
        }

        impl std::ops::$trait<f64> for &Node {
            type Output = Node;
            fn $method(self, rhs: f64) -> Node {
                $op_fn(self, rhs)
            }
        }

        impl std::ops::$trait<Node> for f64 {
            type Output = Node;
            fn $method(self, rhs: Node) -> Node {
                $op_fn(self, rhs)
            }
        }

        impl std::ops::$trait<&Node> for f64 {
            type Output = Node;
            fn $method(self, rhs: &Node) -> Node {
                $op_fn(self, rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, add_op);
impl_binary_op!(Sub, sub, sub_op);
impl_binary_op!(Mul, mul, mul_op);
impl_binary_op!(Div, div, div_op);

impl std::ops::Neg for Node {
    type Output = Node;
    fn neg(self) -> Node {
        neg_op(self)
    }
}

impl std::ops::Neg for &Node {
    type Output = Node;
    fn neg(self) -> Node {
        neg_op(self)
    }
}

// --- num-traits / iterator integration ---

impl Zero for Node {
    /// A fresh constant leaf holding `0.0`.
    fn zero() -> Self {
        Node::new(0.0)
    }

    fn is_zero(&self) -> bool {
        self.value() == 0.0
    }
}

impl One for Node {
    /// A fresh constant leaf holding `1.0`.
    fn one() -> Self {
        Node::new(1.0)
    }
}

impl Sum for Node {
    /// Chains `+` nodes left to right. An empty iterator yields a zero leaf.
    fn sum<I: Iterator<Item = Node>>(iter: I) -> Self {
        iter.reduce(|acc, x| acc + x).unwrap_or_else(Node::zero)
    }
}

impl<'a> Sum<&'a Node> for Node {
    fn sum<I: Iterator<Item = &'a Node>>(iter: I) -> Self {
        iter.cloned().sum()
    }
}

impl Product for Node {
    /// Chains `*` nodes left to right. An empty iterator yields a one leaf.
    fn product<I: Iterator<Item = Node>>(iter: I) -> Self {
        iter.reduce(|acc, x| acc * x).unwrap_or_else(Node::one)
    }
}

impl<'a> Product<&'a Node> for Node {
    fn product<I: Iterator<Item = &'a Node>>(iter: I) -> Self {
        iter.cloned().product()
    }
}
