// scalargrad-core/examples/neuron.rs
//
// Builds a single tanh neuron, runs a backward pass and prints every node of
// the graph with its gradient.

use scalargrad_core::{labeled_node, topological_sort};

fn main() {
    // Inputs
    let x1 = labeled_node(2.0, "x1");
    let x2 = labeled_node(0.0, "x2");
    // Weights and bias
    let w1 = labeled_node(-3.0, "w1");
    let w2 = labeled_node(1.0, "w2");
    let b = labeled_node(6.881_373_587_019_543, "b");

    let x1w1 = &x1 * &w1;
    x1w1.set_label("x1*w1");
    let x2w2 = &x2 * &w2;
    x2w2.set_label("x2*w2");
    let n = &x1w1 + &x2w2 + &b;
    n.set_label("n");
    let o = n.tanh();
    o.set_label("o");

    o.backward();

    println!("output: {}", o);
    for node in topological_sort(&o).iter().rev() {
        println!(
            "{:>8} {:>5} value={:>10.4} grad={:>10.4}",
            node.label().unwrap_or_default(),
            node.op_tag(),
            node.value(),
            node.grad()
        );
    }
}
