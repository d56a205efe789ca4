use rand::rngs::StdRng;
use rand::Rng;
use rand_distr::{Distribution, Normal, Uniform};
use scalargrad_core::Node;

/// One step of a randomly generated expression. Indices point into the pool
/// of nodes built so far (leaves first, then previous steps).
#[derive(Debug, Clone, Copy)]
#[allow(dead_code)]
pub enum Step {
    Add(usize, usize),
    Sub(usize, usize),
    Mul(usize, usize),
    /// `a / (b^2 + 1)`, so the denominator stays away from zero.
    Div(usize, usize),
    Pow(usize, f64),
    Neg(usize),
    Tanh(usize),
    /// `exp(tanh(a))`, bounded so it cannot overflow.
    Exp(usize),
    AddConst(usize, f64),
    MulConst(usize, f64),
}

/// A reproducible expression over `num_leaves` inputs.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct Recipe {
    pub num_leaves: usize,
    pub steps: Vec<Step>,
}

#[allow(dead_code)]
impl Recipe {
    pub fn random(rng: &mut StdRng, num_leaves: usize, num_steps: usize) -> Self {
        let constants = Normal::new(0.0, 0.5).expect("valid normal distribution");
        let mut steps = Vec::with_capacity(num_steps);
        for i in 0..num_steps {
            let pool = num_leaves + i;
            let a = rng.gen_range(0..pool);
            let b = rng.gen_range(0..pool);
            let step = match rng.gen_range(0..10) {
                0 => Step::Add(a, b),
                1 => Step::Sub(a, b),
                2 => Step::Mul(a, b),
                3 => Step::Div(a, b),
                4 => Step::Pow(a, if rng.gen_bool(0.5) { 2.0 } else { 3.0 }),
                5 => Step::Neg(a),
                6 => Step::Tanh(a),
                7 => Step::Exp(a),
                8 => Step::AddConst(a, constants.sample(rng)),
                _ => Step::MulConst(a, constants.sample(rng)),
            };
            steps.push(step);
        }
        Recipe { num_leaves, steps }
    }

    /// Builds the expression over `leaves` and returns its root (the last step).
    pub fn build(&self, leaves: &[Node]) -> Node {
        let mut pool: Vec<Node> = leaves.to_vec();
        for step in &self.steps {
            let out = match *step {
                Step::Add(a, b) => &pool[a] + &pool[b],
                Step::Sub(a, b) => &pool[a] - &pool[b],
                Step::Mul(a, b) => &pool[a] * &pool[b],
                Step::Div(a, b) => &pool[a] / (pool[b].pow(2.0) + 1.0),
                Step::Pow(a, k) => pool[a].pow(k),
                Step::Neg(a) => -&pool[a],
                Step::Tanh(a) => pool[a].tanh(),
                Step::Exp(a) => pool[a].tanh().exp(),
                Step::AddConst(a, c) => &pool[a] + c,
                Step::MulConst(a, c) => c * &pool[a],
            };
            pool.push(out);
        }
        pool.pop().expect("recipe has at least one node")
    }
}

/// Leaf values drawn uniformly from [-1, 1).
#[allow(dead_code)]
pub fn random_point(rng: &mut StdRng, n: usize) -> Vec<f64> {
    let values = Uniform::new(-1.0, 1.0);
    (0..n).map(|_| values.sample(rng)).collect()
}
