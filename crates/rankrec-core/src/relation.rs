/// Pairwise relation queries against a single ranking.
///
/// [`RelationModel`] indexes a [`Ranking`] once (label → [`Position`]) and
/// then answers [`RelationModel::relation`] in O(1).
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::ranking::Ranking;

/// Relation of an ordered pair `(a, b)` within one ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementRelation {
    /// `a` is ranked strictly ahead of `b`.
    Before,
    /// `a` is ranked strictly behind `b`.
    After,
    /// `a` and `b` are tied.
    Same,
    /// At least one of the two elements is absent.
    Unknown,
}

impl ElementRelation {
    /// The relation of `(b, a)` given the relation of `(a, b)`.
    pub fn inverse(self) -> Self {
        match self {
            Self::Before => Self::After,
            Self::After => Self::Before,
            Self::Same => Self::Same,
            Self::Unknown => Self::Unknown,
        }
    }

    /// Returns `true` for [`Before`](Self::Before) and [`After`](Self::After).
    pub fn is_directional(self) -> bool {
        matches!(self, Self::Before | Self::After)
    }

    /// Lowercase name used in human and JSON output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Before => "before",
            Self::After => "after",
            Self::Same => "same",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ElementRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How two elements of a ranking are compared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Comparator {
    /// Cluster index only: elements of one cluster are [`ElementRelation::Same`].
    #[default]
    Cluster,
    /// Cluster index, then position inside the cluster. Two distinct elements
    /// are never `Same`.
    Position,
}

/// Where an element sits in a ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Cluster index.
    pub cluster: usize,
    /// Index inside the cluster.
    pub offset: usize,
}

/// Relation lookup for one ranking.
#[derive(Debug, Clone)]
pub struct RelationModel {
    positions: HashMap<String, Position>,
    comparator: Comparator,
}

impl RelationModel {
    /// Indexes `ranking` with the default [`Comparator::Cluster`].
    pub fn new(ranking: &Ranking) -> Self {
        Self::with_comparator(ranking, Comparator::Cluster)
    }

    /// Indexes `ranking` with an explicit comparator.
    ///
    /// A repeated label keeps its last position.
    pub fn with_comparator(ranking: &Ranking, comparator: Comparator) -> Self {
        let mut positions = HashMap::with_capacity(ranking.element_count());
        for (cluster, labels) in ranking.clusters().iter().enumerate() {
            for (offset, label) in labels.iter().enumerate() {
                positions.insert(label.clone(), Position { cluster, offset });
            }
        }
        Self {
            positions,
            comparator,
        }
    }

    /// Relation of `a` to `b`.
    ///
    /// [`ElementRelation::Unknown`] if either is absent from the ranking.
    pub fn relation(&self, a: &str, b: &str) -> ElementRelation {
        let (Some(pa), Some(pb)) = (self.positions.get(a), self.positions.get(b)) else {
            return ElementRelation::Unknown;
        };
        let ordering = match self.comparator {
            Comparator::Cluster => pa.cluster.cmp(&pb.cluster),
            Comparator::Position => (pa.cluster, pa.offset).cmp(&(pb.cluster, pb.offset)),
        };
        match ordering {
            Ordering::Less => ElementRelation::Before,
            Ordering::Greater => ElementRelation::After,
            Ordering::Equal => ElementRelation::Same,
        }
    }

    /// Returns `true` if `label` appears in the ranking.
    pub fn contains(&self, label: &str) -> bool {
        self.positions.contains_key(label)
    }

    /// Position of `label`, if present.
    pub fn position(&self, label: &str) -> Option<Position> {
        self.positions.get(label).copied()
    }

    /// Cluster index of `label`, if present.
    pub fn cluster_of(&self, label: &str) -> Option<usize> {
        self.positions.get(label).map(|p| p.cluster)
    }

    /// Number of distinct labels indexed.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` if the ranking had no elements.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// The comparator this model was built with.
    pub fn comparator(&self) -> Comparator {
        self.comparator
    }
}

/// Returns `true` if `a` and `b` are tied in both models.
pub fn same_in_both(first: &RelationModel, second: &RelationModel, a: &str, b: &str) -> bool {
    first.relation(a, b) == ElementRelation::Same && second.relation(a, b) == ElementRelation::Same
}
