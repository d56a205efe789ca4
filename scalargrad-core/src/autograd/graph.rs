use crate::node::Node;
use crate::node_data::NodeData;
use std::collections::HashSet;

/// Identity of a node in the computation graph.
///
/// The address of the shared `NodeData` is used rather than the value, since
/// two distinct nodes can hold the same value. The pointer is only compared,
/// never dereferenced.
pub type NodeId = *const NodeData;

/// Builds a topological ordering of every node reachable from `root`.
///
/// The traversal is a depth-first post-order walk: a node is emitted only
/// after its whole operand subtree has been emitted, and each node appears
/// exactly once. Operands therefore always precede their consumers, and the
/// root is the last element. Iterating the result in reverse gives the order
/// in which the backward pass must replay local derivative rules.
///
/// An explicit stack is used instead of recursion so that long chains of
/// operations cannot overflow the call stack. Runs in O(V + E).
pub fn topological_sort(root: &Node) -> Vec<Node> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted_list: Vec<Node> = Vec::new();
    // (node, operands_already_pushed)
    let mut stack: Vec<(Node, bool)> = vec![(root.clone(), false)];

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            log::trace!("[topological_sort] emitting node {:?}", node.node_id());
            sorted_list.push(node);
            continue;
        }
        if !visited.insert(node.node_id()) {
            continue;
        }

        stack.push((node.clone(), true));
        // Reversed so the first operand is visited first.
        for input in node.operands().into_iter().rev() {
            if !visited.contains(&input.node_id()) {
                stack.push((input, false));
            }
        }
    }

    sorted_list
}
