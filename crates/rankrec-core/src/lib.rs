#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod contradiction;
pub mod layering;
pub mod merge;
pub mod pipeline;
pub mod ranking;
pub mod relation;

pub use contradiction::{ElementPair, find_contradictions, is_contradiction};
pub use layering::{
    CycleError, CyclePolicy, Layering, LayeringOutcome, build_consistent_ranking,
    build_dominance_ranking,
};
pub use merge::{RelationMap, TieBreak, merge_relation};
pub use pipeline::{
    PairReport, RankingSide, ReconcileConfig, ReconcileError, ReconcileOutput, ReconcileWarning,
    explain_pair, parse_side, reconcile, reconcile_json, reconcile_payload, reconcile_with_config,
};
pub use ranking::{
    ElementSet, InputFormatError, InputFormatKind, Ranking, RankingIssue, parse_ranking,
};
pub use relation::{Comparator, ElementRelation, Position, RelationModel, same_in_both};

/// Returns the current version of the rankrec-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
