use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::utils::testing::check_grads_near;
use scalargrad_core::{check_grad, labeled_node, node, GradCheckConfig, Node, ScalarGradError};

mod common;
use common::{random_point, Recipe};

#[test]
fn test_reference_scenario() {
    let a = labeled_node(2.0, "a");
    let b = labeled_node(-3.0, "b");
    let c = labeled_node(10.0, "c");
    let e = &a * &b;
    e.set_label("e");
    let d = &e + &c;
    d.set_label("d");
    let f = labeled_node(-2.0, "f");
    let l = &d * &f;
    l.set_label("L");

    assert_eq!(l.value(), -8.0);
    assert_eq!(l.to_string(), "Node(value=-8.0)");

    l.backward();

    check_grads_near(
        &[&a, &b, &c, &d, &e, &f, &l],
        &[6.0, -4.0, -2.0, -2.0, -2.0, 4.0, 1.0],
        1e-12,
    );
}

#[test]
fn test_repeated_backward_keeps_reference_gradients() {
    let a = node(2.0);
    let b = node(-3.0);
    let c = node(10.0);
    let f = node(-2.0);
    let l = (&a * &b + &c) * &f;

    l.backward();
    l.backward();
    l.backward();

    check_grads_near(&[&a, &b, &c, &f], &[6.0, -4.0, -2.0, 4.0], 1e-12);
}

#[test]
fn test_single_neuron() {
    // o = tanh(x1*w1 + x2*w2 + b)
    let x1 = labeled_node(2.0, "x1");
    let x2 = labeled_node(0.0, "x2");
    let w1 = labeled_node(-3.0, "w1");
    let w2 = labeled_node(1.0, "w2");
    let b = labeled_node(6.881_373_587_019_543, "b");
    let n = &x1 * &w1 + &x2 * &w2 + &b;
    let o = n.tanh();

    assert_relative_eq!(o.value(), 0.7071, epsilon = 1e-4);
    o.backward();

    check_grads_near(&[&x1, &w1, &x2, &w2, &b], &[-1.5, 1.0, 0.5, 0.0, 0.5], 1e-4);
}

#[test]
fn test_neuron_with_tanh_expanded_through_exp() {
    // tanh(n) written as (e^2n - 1) / (e^2n + 1) must give the same gradients
    let build = |inputs: &[Node]| -> Result<Node, ScalarGradError> {
        let n = &inputs[0] * &inputs[1] + &inputs[2];
        let e = (2.0 * &n).exp();
        Ok((&e - 1.0) / (&e + 1.0))
    };
    let direct = |inputs: &[Node]| -> Result<Node, ScalarGradError> {
        Ok((&inputs[0] * &inputs[1] + &inputs[2]).tanh())
    };

    let point = [2.0, -3.0, 6.881_373_587_019_543];
    let config = GradCheckConfig::default();
    let expanded_grads = check_grad(build, &point, &config).unwrap();
    let direct_grads = check_grad(direct, &point, &config).unwrap();

    for (e, d) in expanded_grads.iter().zip(direct_grads.iter()) {
        assert_relative_eq!(*e, *d, epsilon = 1e-9);
    }
}

#[test]
fn test_random_graphs_match_finite_differences() {
    let mut rng = StdRng::seed_from_u64(0x5ca1a6);
    let config = GradCheckConfig::default();

    for trial in 0..200 {
        let recipe = Recipe::random(&mut rng, 3, 5);
        let point = random_point(&mut rng, recipe.num_leaves);
        let result = check_grad(|leaves| Ok(recipe.build(leaves)), &point, &config);
        assert!(
            result.is_ok(),
            "trial {}: {:?} at {:?}: {:?}",
            trial,
            recipe,
            point,
            result
        );
    }
}

#[test]
fn test_leaf_outside_expression_keeps_zero_gradient() {
    let x = node(1.0);
    let unused = node(5.0);
    let y = x.exp();
    y.backward();
    assert_eq!(unused.grad(), 0.0);
}
