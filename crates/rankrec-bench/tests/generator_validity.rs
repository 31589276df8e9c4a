//! Tests that generated ranking pairs have the shape each tier promises.
#![allow(clippy::expect_used)]

use std::collections::HashSet;

use rankrec_bench::{GeneratorConfig, SizeTier, generate_json_pair, generate_ranking_pair};
use rankrec_core::{Ranking, parse_ranking};

fn assert_well_formed(ranking: &Ranking, label: &str) {
    assert!(
        ranking.issues().is_empty(),
        "{label}: unexpected issues {:?}",
        ranking.issues()
    );
    let unique: HashSet<&str> = ranking.labels().collect();
    assert_eq!(unique.len(), ranking.element_count(), "{label}");
}

#[test]
fn generated_pairs_are_well_formed() {
    for tier in [SizeTier::Small, SizeTier::Medium, SizeTier::Large] {
        for seed in [42, 123, 999] {
            let config = tier.config(seed);
            let (first, second) = generate_ranking_pair(&config);
            let label = format!("{}/seed={seed}", tier.name());
            assert_well_formed(&first, &label);
            assert_well_formed(&second, &label);
            assert_eq!(first.element_count(), config.num_elements, "{label}");
            assert_eq!(first.len(), config.first_clusters, "{label}");
        }
    }
}

#[test]
fn generation_is_deterministic() {
    let config = SizeTier::Medium.config(7);
    assert_eq!(generate_ranking_pair(&config), generate_ranking_pair(&config));
}

#[test]
fn different_seeds_differ() {
    let a = generate_ranking_pair(&SizeTier::Medium.config(1));
    let b = generate_ranking_pair(&SizeTier::Medium.config(2));
    assert_ne!(a, b);
}

#[test]
fn extra_elements_only_in_second() {
    let config = SizeTier::Small.config(42);
    let (first, second) = generate_ranking_pair(&config);
    let first_labels: HashSet<&str> = first.labels().collect();
    let only_second = second
        .labels()
        .filter(|l| !first_labels.contains(l))
        .count();
    assert_eq!(only_second, config.extra_elements);
}

#[test]
fn no_swaps_full_overlap_means_no_disagreement() {
    let config = GeneratorConfig {
        seed: 5,
        num_elements: 40,
        first_clusters: 8,
        second_clusters: 8,
        swap_rate: 0.0,
        overlap: 1.0,
        extra_elements: 0,
    };
    let (first, second) = generate_ranking_pair(&config);
    let output = rankrec_core::reconcile(&first, &second).expect("reconcile");
    assert!(output.contradictions.is_empty());
}

#[test]
fn json_pair_parses_back() {
    let config = SizeTier::Small.config(42);
    let (first_json, second_json) = generate_json_pair(&config).expect("serialize");
    let (first, second) = generate_ranking_pair(&config);
    assert_eq!(parse_ranking(&first_json).expect("first parses"), first);
    assert_eq!(parse_ranking(&second_json).expect("second parses"), second);
}
