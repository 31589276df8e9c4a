/// Contradiction core: element pairs whose order is reversed between two rankings.
///
/// A pair `{a, b}` is a contradiction when both rankings know both elements
/// and one places `a` before `b` while the other places `a` after `b`. A tie
/// on one side is not a contradiction (the merge resolves it in favour of the
/// definite order), and a pair with an element missing from either ranking is
/// skipped entirely.
use std::fmt;

use serde::Serialize;

use crate::ranking::ElementSet;
use crate::relation::{ElementRelation, RelationModel};

/// An unordered pair of element labels, stored in [`ElementSet`] order.
///
/// Serializes as a two-element JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ElementPair(pub String, pub String);

impl ElementPair {
    /// Creates a pair from two labels.
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self(first.into(), second.into())
    }

    /// The element that comes first in element-set order.
    pub fn first(&self) -> &str {
        &self.0
    }

    /// The element that comes second in element-set order.
    pub fn second(&self) -> &str {
        &self.1
    }
}

impl fmt::Display for ElementPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.0, self.1)
    }
}

/// Returns `true` if the two relations point in opposite directions.
pub fn is_contradiction(first: ElementRelation, second: ElementRelation) -> bool {
    matches!(
        (first, second),
        (ElementRelation::Before, ElementRelation::After)
            | (ElementRelation::After, ElementRelation::Before)
    )
}

/// Finds every contradicting pair among `elements`.
///
/// Pairs are emitted in element-set order: by the ordinal of the first
/// element, then of the second. Each unordered pair is visited once, so the
/// result has no duplicates.
pub fn find_contradictions(
    elements: &ElementSet,
    first: &RelationModel,
    second: &RelationModel,
) -> Vec<ElementPair> {
    let labels = elements.labels();
    let mut pairs = Vec::new();

    for (i, a) in labels.iter().enumerate() {
        for b in &labels[i + 1..] {
            if is_contradiction(first.relation(a, b), second.relation(a, b)) {
                pairs.push(ElementPair::new(a.as_str(), b.as_str()));
            }
        }
    }
    pairs
}
