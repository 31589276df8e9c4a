//! Ranking-pair generator.
//!
//! The first ranking is a random clustering of a shuffled label set. The
//! second starts from the same order, receives a number of adjacent swaps
//! (each swap across a cluster boundary of the first ranking becomes a
//! contradiction), loses some labels, gains some new ones, and is clustered
//! independently.

pub mod clusters;
pub mod perturb;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rankrec_core::Ranking;

use clusters::split_into_clusters;
use perturb::{drop_elements, perturb_order};

/// Configuration for the ranking-pair generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Seed for the random number generator (deterministic).
    pub seed: u64,
    /// Number of labels in the first ranking.
    pub num_elements: usize,
    /// Cluster count of the first ranking (clamped to `1..=num_elements`).
    pub first_clusters: usize,
    /// Cluster count of the second ranking.
    pub second_clusters: usize,
    /// Adjacent swaps applied to the second ranking, per element.
    pub swap_rate: f64,
    /// Probability that a label of the first ranking is kept in the second.
    pub overlap: f64,
    /// Labels appended to the second ranking only.
    pub extra_elements: usize,
}

/// Predefined size tiers for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// 25 elements, 5 clusters.
    Small,
    /// 150 elements, 20 clusters.
    Medium,
    /// 400 elements, 40 clusters.
    Large,
    /// 1000 elements, 80 clusters.
    XLarge,
}

impl SizeTier {
    /// Returns the default `GeneratorConfig` for this size tier.
    pub fn config(self, seed: u64) -> GeneratorConfig {
        let (num_elements, first_clusters, second_clusters) = match self {
            SizeTier::Small => (25, 5, 7),
            SizeTier::Medium => (150, 20, 25),
            SizeTier::Large => (400, 40, 50),
            SizeTier::XLarge => (1000, 80, 100),
        };
        GeneratorConfig {
            seed,
            num_elements,
            first_clusters,
            second_clusters,
            swap_rate: 0.5,
            overlap: 0.95,
            extra_elements: num_elements / 20,
        }
    }

    /// Short name used in benchmark IDs.
    pub fn name(self) -> &'static str {
        match self {
            SizeTier::Small => "S",
            SizeTier::Medium => "M",
            SizeTier::Large => "L",
            SizeTier::XLarge => "XL",
        }
    }
}

/// Label of the `i`-th generated element.
pub fn element_label(i: usize) -> String {
    format!("e{i:05}")
}

/// Generates a ranking pair from `config`.
///
/// Identical configs (including the seed) produce identical pairs.
pub fn generate_ranking_pair(config: &GeneratorConfig) -> (Ranking, Ranking) {
    let mut rng = StdRng::seed_from_u64(config.seed);

    let mut order: Vec<String> = (0..config.num_elements).map(element_label).collect();
    order.shuffle(&mut rng);
    let first = Ranking::new(split_into_clusters(
        order.clone(),
        config.first_clusters,
        &mut rng,
    ));

    let swaps = (config.num_elements as f64 * config.swap_rate).round() as usize;
    perturb_order(&mut order, swaps, &mut rng);
    let mut second_order = drop_elements(order, config.overlap, &mut rng);
    second_order.extend(
        (config.num_elements..config.num_elements + config.extra_elements).map(element_label),
    );
    let second = Ranking::new(split_into_clusters(
        second_order,
        config.second_clusters,
        &mut rng,
    ));

    (first, second)
}

/// Generates a ranking pair and serializes both sides to JSON payloads.
///
/// # Errors
///
/// Returns the serializer error if either ranking fails to serialize.
pub fn generate_json_pair(config: &GeneratorConfig) -> Result<(String, String), serde_json::Error> {
    let (first, second) = generate_ranking_pair(config);
    Ok((serde_json::to_string(&first)?, serde_json::to_string(&second)?))
}
