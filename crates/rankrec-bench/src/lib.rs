//! Ranking-pair generator and benchmark utilities for rankrec.
//!
//! This crate provides deterministic generation of ranking pairs with a
//! controlled amount of disagreement, for benchmarking and invariant testing
//! of `rankrec-core`.

pub mod correctness;
pub mod generator;

pub use generator::{GeneratorConfig, SizeTier, generate_json_pair, generate_ranking_pair};
