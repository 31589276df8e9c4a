//! Order perturbations that turn one ranking into a disagreeing second one.

use rand::Rng;
use rand::rngs::StdRng;

/// Applies `swaps` random adjacent transpositions to `order`.
pub fn perturb_order(order: &mut [String], swaps: usize, rng: &mut StdRng) {
    if order.len() < 2 {
        return;
    }
    for _ in 0..swaps {
        let i = rng.gen_range(0..order.len() - 1);
        order.swap(i, i + 1);
    }
}

/// Keeps each label with probability `keep`, preserving order.
pub fn drop_elements(order: Vec<String>, keep: f64, rng: &mut StdRng) -> Vec<String> {
    let keep = keep.clamp(0.0, 1.0);
    order.into_iter().filter(|_| rng.gen_bool(keep)).collect()
}
