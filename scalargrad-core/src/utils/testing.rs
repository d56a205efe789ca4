use crate::node::Node;

/// Checks that the gradients of `nodes` match `expected` within `tolerance`.
/// Panics with the offending index on the first mismatch.
pub fn check_grads_near(nodes: &[&Node], expected: &[f64], tolerance: f64) {
    assert_eq!(nodes.len(), expected.len(), "Gradient count mismatch");

    for (i, (node, e)) in nodes.iter().zip(expected.iter()).enumerate() {
        let actual = node.grad();
        let diff = (actual - e).abs();
        if !(diff <= tolerance) {
            panic!(
                "Gradient mismatch at index {} ({:?}): actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, node, actual, e, diff, tolerance
            );
        }
    }
}
