use crate::autograd::graph::topological_sort;
use crate::node::Node;

impl Node {
    /// Performs the backward pass starting from this node.
    ///
    /// After the call, every node reachable from `self` holds
    /// \( \frac{\partial\, self}{\partial\, node} \) in its gradient, summed
    /// over every path from `self` (nodes used several times receive the sum
    /// of all contributions).
    ///
    /// Gradients are reset before accumulation: every reachable node starts
    /// the pass at `0.0`, then `self` is seeded with `1.0` and the local rules
    /// are replayed in reverse topological order. Calling `backward` twice
    /// therefore gives the same gradients, and a later pass from another root
    /// overwrites the gradients of any node the two graphs share. Nodes that
    /// are not reachable from `self` are not touched.
    ///
    /// Calling it on a leaf is valid and simply sets the leaf's gradient to 1.
    pub fn backward(&self) {
        let sorted_nodes = topological_sort(self);
        log::debug!(
            "backward: {} nodes reachable from root {:?}",
            sorted_nodes.len(),
            self.node_id()
        );

        for node in &sorted_nodes {
            node.set_grad(0.0);
        }
        self.set_grad(1.0);

        for node in sorted_nodes.iter().rev() {
            if let Some(grad_fn) = node.grad_fn() {
                grad_fn.backward(node);
            }
        }
    }

    /// Resets the gradient of every node reachable from this one to `0.0`.
    pub fn zero_grad(&self) {
        for node in topological_sort(self) {
            node.set_grad(0.0);
        }
    }
}

#[cfg(test)]
#[path = "autograd_methods_test.rs"]
mod tests;
