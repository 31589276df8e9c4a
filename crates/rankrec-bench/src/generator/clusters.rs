//! Random clustering of an ordered label list.

use rand::rngs::StdRng;
use rand::seq::index::sample;

/// Splits `labels` into `clusters` non-empty runs at random cut points,
/// preserving order.
///
/// `clusters` is clamped to `1..=labels.len()`; an empty list yields no
/// clusters.
pub fn split_into_clusters(
    mut labels: Vec<String>,
    clusters: usize,
    rng: &mut StdRng,
) -> Vec<Vec<String>> {
    let n = labels.len();
    if n == 0 {
        return Vec::new();
    }
    let k = clusters.clamp(1, n);

    let mut cuts: Vec<usize> = sample(rng, n - 1, k - 1)
        .into_iter()
        .map(|c| c + 1)
        .collect();
    cuts.sort_unstable();

    let mut out = Vec::with_capacity(k);
    for &cut in cuts.iter().rev() {
        out.push(labels.split_off(cut));
    }
    out.push(labels);
    out.reverse();
    out
}
