/// Full reconciliation pipeline for two rankings.
///
/// This module orchestrates the engine:
///
/// 1. Structural checks on both inputs (reported as warnings).
/// 2. Element-set construction in first-appearance order.
/// 3. One [`RelationModel`] per input.
/// 4. Contradiction-core extraction.
/// 5. Relation merge and transitive closure.
/// 6. Consistent-ranking construction.
///
/// [`reconcile`] and [`reconcile_with_config`] work on parsed rankings;
/// [`reconcile_json`] and [`reconcile_payload`] are the JSON boundary.
use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::json;

use crate::contradiction::{ElementPair, find_contradictions, is_contradiction};
use crate::layering::{CyclePolicy, Layering, build_consistent_ranking, build_dominance_ranking};
use crate::merge::{RelationMap, TieBreak};
use crate::ranking::{ElementSet, InputFormatError, Ranking, RankingIssue, parse_ranking};
use crate::relation::{Comparator, ElementRelation, RelationModel};

// ---------------------------------------------------------------------------
// RankingSide
// ---------------------------------------------------------------------------

/// Which of the two inputs a message refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankingSide {
    /// The first ranking (wins ties under [`TieBreak::FirstRanking`]).
    First,
    /// The second ranking.
    Second,
}

impl RankingSide {
    /// `"first"` or `"second"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Second => "second",
        }
    }
}

impl fmt::Display for RankingSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ReconcileError
// ---------------------------------------------------------------------------

/// Errors that stop a reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileError {
    /// An input payload is not an array of arrays of strings.
    InputFormat {
        /// Which payload failed.
        side: RankingSide,
        /// The decoding failure.
        error: InputFormatError,
    },
    /// The merged relation is cyclic and the cycle policy is strict.
    ///
    /// Cannot occur for relations produced by [`RelationMap::merge`]; kept
    /// for callers that layer their own relation maps.
    CycleDetected {
        /// Elements left unplaced, in element-set order.
        unplaced: Vec<String>,
    },
    /// The output could not be serialized.
    Serialization(String),
}

impl ReconcileError {
    /// Returns `true` for failures of the input rather than of processing.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InputFormat { .. })
    }

    /// The structured error payload returned at the JSON boundary.
    ///
    /// ```json
    /// { "error": { "kind": "input_format", "ranking": "first", "message": "..." } }
    /// { "error": { "kind": "processing", "message": "..." } }
    /// ```
    pub fn to_payload(&self) -> serde_json::Value {
        match self {
            Self::InputFormat { side, error } => json!({
                "error": {
                    "kind": "input_format",
                    "ranking": side.as_str(),
                    "message": error.to_string(),
                    "line": error.line,
                    "column": error.column,
                }
            }),
            Self::CycleDetected { unplaced } => json!({
                "error": {
                    "kind": "processing",
                    "message": self.to_string(),
                    "unplaced": unplaced,
                }
            }),
            Self::Serialization(_) => json!({
                "error": {
                    "kind": "processing",
                    "message": self.to_string(),
                }
            }),
        }
    }
}

impl fmt::Display for ReconcileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputFormat { side, error } => write!(f, "{side} ranking: {error}"),
            Self::CycleDetected { unplaced } => write!(
                f,
                "merged relation is cyclic; cannot place: {}",
                unplaced.join(", ")
            ),
            Self::Serialization(msg) => write!(f, "could not serialize output: {msg}"),
        }
    }
}

impl std::error::Error for ReconcileError {}

// ---------------------------------------------------------------------------
// ReconcileWarning
// ---------------------------------------------------------------------------

/// Non-fatal issue found while reconciling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileWarning {
    /// An input repeats a label; its last position is used.
    DuplicateElement {
        /// Input containing the repeat.
        side: RankingSide,
        /// The repeated label.
        label: String,
    },
    /// An input contains an empty cluster.
    EmptyCluster {
        /// Input containing the cluster.
        side: RankingSide,
        /// Cluster index.
        index: usize,
    },
    /// An element was placed to break a cycle ([`CyclePolicy::BreakFirst`]).
    CycleBroken {
        /// The element placed.
        element: String,
    },
}

impl ReconcileWarning {
    fn from_issue(side: RankingSide, issue: RankingIssue) -> Self {
        match issue {
            RankingIssue::DuplicateElement { label, .. } => Self::DuplicateElement { side, label },
            RankingIssue::EmptyCluster { index } => Self::EmptyCluster { side, index },
        }
    }
}

impl fmt::Display for ReconcileWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateElement { side, label } => write!(
                f,
                "{side} ranking lists \"{label}\" more than once; using its last position"
            ),
            Self::EmptyCluster { side, index } => {
                write!(f, "{side} ranking has an empty cluster at index {index}")
            }
            Self::CycleBroken { element } => {
                write!(f, "placed \"{element}\" early to break a cycle")
            }
        }
    }
}

impl Serialize for ReconcileWarning {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ---------------------------------------------------------------------------
// ReconcileConfig
// ---------------------------------------------------------------------------

/// Policies for one reconciliation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileConfig {
    /// Resolution of pairs the rankings order in opposite directions.
    /// Unused by [`Layering::Dominance`].
    ///
    /// Default: [`TieBreak::FirstRanking`].
    pub tie_break: TieBreak,
    /// Behaviour when topological layering finds no unconstrained element.
    ///
    /// Default: [`CyclePolicy::BreakFirst`].
    pub cycle_policy: CyclePolicy,
    /// How elements of one ranking are compared.
    ///
    /// Default: [`Comparator::Cluster`].
    pub comparator: Comparator,
    /// How the consistent ranking is built.
    ///
    /// Default: [`Layering::Topological`].
    pub layering: Layering,
}

// ---------------------------------------------------------------------------
// ReconcileOutput
// ---------------------------------------------------------------------------

/// The result of a successful reconciliation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReconcileOutput {
    /// Pairs ordered in opposite directions by the two inputs.
    pub contradictions: Vec<ElementPair>,
    /// A ranking consistent with the merged relation.
    pub consistent_ranking: Ranking,
    /// Non-fatal issues, omitted from JSON when empty.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<ReconcileWarning>,
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Reconciles two rankings with the default [`ReconcileConfig`].
///
/// # Errors
///
/// See [`reconcile_with_config`].
pub fn reconcile(first: &Ranking, second: &Ranking) -> Result<ReconcileOutput, ReconcileError> {
    reconcile_with_config(first, second, &ReconcileConfig::default())
}

/// Reconciles two rankings.
///
/// Two empty rankings give an empty output, not an error.
///
/// # Errors
///
/// Returns [`ReconcileError::CycleDetected`] if layering finds a cycle under
/// [`CyclePolicy::Strict`].
pub fn reconcile_with_config(
    first: &Ranking,
    second: &Ranking,
    config: &ReconcileConfig,
) -> Result<ReconcileOutput, ReconcileError> {
    let mut warnings: Vec<ReconcileWarning> = first
        .issues()
        .into_iter()
        .map(|issue| ReconcileWarning::from_issue(RankingSide::First, issue))
        .chain(
            second
                .issues()
                .into_iter()
                .map(|issue| ReconcileWarning::from_issue(RankingSide::Second, issue)),
        )
        .collect();

    let elements = ElementSet::from_rankings(first, second);
    if elements.is_empty() {
        tracing::debug!("no elements in either ranking");
        return Ok(ReconcileOutput {
            warnings,
            ..ReconcileOutput::default()
        });
    }

    let first_model = RelationModel::with_comparator(first, config.comparator);
    let second_model = RelationModel::with_comparator(second, config.comparator);

    let contradictions = find_contradictions(&elements, &first_model, &second_model);
    tracing::debug!(
        elements = elements.len(),
        contradictions = contradictions.len(),
        "found contradiction core"
    );

    let consistent_ranking = match config.layering {
        Layering::Topological => {
            let relations =
                RelationMap::merge(elements, &first_model, &second_model, config.tie_break);
            let outcome = build_consistent_ranking(
                &relations,
                &first_model,
                &second_model,
                config.cycle_policy,
            )
            .map_err(|e| ReconcileError::CycleDetected {
                unplaced: e.unplaced,
            })?;
            warnings.extend(
                outcome
                    .broken_cycles
                    .into_iter()
                    .map(|element| ReconcileWarning::CycleBroken { element }),
            );
            outcome.ranking
        }
        Layering::Dominance => build_dominance_ranking(&elements, &first_model, &second_model),
    };

    Ok(ReconcileOutput {
        contradictions,
        consistent_ranking,
        warnings,
    })
}

/// Parses two JSON ranking payloads, reconciles them, and serializes the output.
///
/// # Errors
///
/// Returns [`ReconcileError::InputFormat`] naming the failing payload, or any
/// error of [`reconcile_with_config`].
pub fn reconcile_json(
    first: &str,
    second: &str,
    config: &ReconcileConfig,
) -> Result<String, ReconcileError> {
    let first = parse_side(first, RankingSide::First)?;
    let second = parse_side(second, RankingSide::Second)?;
    let output = reconcile_with_config(&first, &second, config)?;
    serde_json::to_string(&output).map_err(|e| ReconcileError::Serialization(e.to_string()))
}

/// Like [`reconcile_json`], but returns the structured error payload in place
/// of the normal output on failure.
pub fn reconcile_payload(first: &str, second: &str, config: &ReconcileConfig) -> serde_json::Value {
    let result = parse_side(first, RankingSide::First).and_then(|first| {
        let second = parse_side(second, RankingSide::Second)?;
        reconcile_with_config(&first, &second, config)
    });
    match result.and_then(|output| {
        serde_json::to_value(&output).map_err(|e| ReconcileError::Serialization(e.to_string()))
    }) {
        Ok(value) => value,
        Err(e) => e.to_payload(),
    }
}

/// Parses one payload, tagging failures with `side`.
///
/// # Errors
///
/// Returns [`ReconcileError::InputFormat`].
pub fn parse_side(payload: &str, side: RankingSide) -> Result<Ranking, ReconcileError> {
    parse_ranking(payload).map_err(|error| ReconcileError::InputFormat { side, error })
}

// ---------------------------------------------------------------------------
// Pair explanation
// ---------------------------------------------------------------------------

/// How one pair is related in each input and after the merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairReport {
    /// Left element.
    pub a: String,
    /// Right element.
    pub b: String,
    /// Relation of `a` to `b` in the first ranking.
    pub first: ElementRelation,
    /// Relation of `a` to `b` in the second ranking.
    pub second: ElementRelation,
    /// Relation after merge and closure; `unknown` means unconstrained.
    pub merged: ElementRelation,
    /// Whether the pair belongs to the contradiction core.
    pub contradiction: bool,
}

/// Explains how `a` relates to `b` in both inputs and in the merged relation.
pub fn explain_pair(
    first: &Ranking,
    second: &Ranking,
    a: &str,
    b: &str,
    config: &ReconcileConfig,
) -> PairReport {
    let first_model = RelationModel::with_comparator(first, config.comparator);
    let second_model = RelationModel::with_comparator(second, config.comparator);
    let r1 = first_model.relation(a, b);
    let r2 = second_model.relation(a, b);

    let relations = RelationMap::merge(
        ElementSet::from_rankings(first, second),
        &first_model,
        &second_model,
        config.tie_break,
    );

    PairReport {
        a: a.to_owned(),
        b: b.to_owned(),
        first: r1,
        second: r2,
        merged: relations.relation(a, b),
        contradiction: a != b && is_contradiction(r1, r2),
    }
}
