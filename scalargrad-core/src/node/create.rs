use crate::node::Node;

/// Creates a leaf node holding `value`.
///
/// Leaves are the inputs and parameters of a graph. Each call creates a node
/// with its own identity, even when the value is already used elsewhere.
pub fn node(value: f64) -> Node {
    Node::new(value)
}

/// Creates a labelled leaf node. The label is only used for diagnostics.
pub fn labeled_node(value: f64, label: impl Into<String>) -> Node {
    Node::with_label(value, label)
}
