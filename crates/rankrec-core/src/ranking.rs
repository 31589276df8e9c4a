/// Ranking input types and JSON parsing.
///
/// A [`Ranking`] is an ordered sequence of clusters; every element of a
/// cluster is tied with the others. On the wire a ranking is a JSON array of
/// arrays of strings, e.g. `[["a", "b"], ["c"]]`.
///
/// [`ElementSet`] is the union of the elements of two rankings in
/// first-appearance order (first ranking cluster by cluster, then the second
/// ranking). Every pairwise scan in the engine walks this order, which makes
/// contradiction lists and layer selection deterministic.
use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Ranking
// ---------------------------------------------------------------------------

/// An ordered sequence of clusters of element labels.
///
/// The type does not reject repeated labels or empty clusters; see
/// [`Ranking::issues`] for the checks the pipeline reports as warnings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ranking {
    clusters: Vec<Vec<String>>,
}

impl Ranking {
    /// Wraps an already-built cluster list.
    pub fn new(clusters: Vec<Vec<String>>) -> Self {
        Self { clusters }
    }

    /// Builds a ranking from anything that yields clusters of string-like labels.
    ///
    /// ```
    /// use rankrec_core::Ranking;
    ///
    /// let r = Ranking::from_labels([vec!["a", "b"], vec!["c"]]);
    /// assert_eq!(r.len(), 2);
    /// ```
    pub fn from_labels<I, C, S>(clusters: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            clusters: clusters
                .into_iter()
                .map(|c| c.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    /// The clusters in rank order.
    pub fn clusters(&self) -> &[Vec<String>] {
        &self.clusters
    }

    /// Consumes the ranking and returns its clusters.
    pub fn into_clusters(self) -> Vec<Vec<String>> {
        self.clusters
    }

    /// Number of clusters (including empty ones).
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    /// Returns `true` if the ranking has no clusters.
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// All labels in rank order, cluster by cluster.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.clusters.iter().flatten().map(String::as_str)
    }

    /// Total number of label occurrences across all clusters.
    pub fn element_count(&self) -> usize {
        self.clusters.iter().map(Vec::len).sum()
    }

    /// Reports structural issues that do not prevent reconciliation.
    ///
    /// A repeated label is reported once per extra occurrence; the last
    /// occurrence is the one the relation model uses.
    pub fn issues(&self) -> Vec<RankingIssue> {
        let mut issues = Vec::new();
        let mut seen: HashMap<&str, usize> = HashMap::new();

        for (index, cluster) in self.clusters.iter().enumerate() {
            if cluster.is_empty() {
                issues.push(RankingIssue::EmptyCluster { index });
            }
            for label in cluster {
                if let Some(previous) = seen.insert(label.as_str(), index) {
                    issues.push(RankingIssue::DuplicateElement {
                        label: label.clone(),
                        first_cluster: previous,
                        cluster: index,
                    });
                }
            }
        }
        issues
    }
}

/// A non-fatal structural problem in a single ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RankingIssue {
    /// The same label appears more than once.
    DuplicateElement {
        /// The repeated label.
        label: String,
        /// Cluster index of the previous occurrence.
        first_cluster: usize,
        /// Cluster index of this occurrence.
        cluster: usize,
    },
    /// A cluster with no elements.
    EmptyCluster {
        /// Cluster index.
        index: usize,
    },
}

impl fmt::Display for RankingIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateElement {
                label,
                first_cluster,
                cluster,
            } => write!(
                f,
                "element \"{label}\" appears in cluster {first_cluster} and again in cluster \
                 {cluster}; the later position is used"
            ),
            Self::EmptyCluster { index } => write!(f, "cluster {index} is empty"),
        }
    }
}

// ---------------------------------------------------------------------------
// ElementSet
// ---------------------------------------------------------------------------

/// The union of the elements of two rankings, in first-appearance order.
///
/// Each label gets a dense ordinal in `[0, len)` used to index the relation
/// matrix and the layering graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementSet {
    labels: Vec<String>,
    ordinals: HashMap<String, usize>,
}

impl ElementSet {
    /// Collects every label of `first` and then `second`, skipping repeats.
    pub fn from_rankings(first: &Ranking, second: &Ranking) -> Self {
        let mut set = Self::default();
        for label in first.labels().chain(second.labels()) {
            set.insert(label);
        }
        set
    }

    fn insert(&mut self, label: &str) {
        if self.ordinals.contains_key(label) {
            return;
        }
        self.ordinals.insert(label.to_owned(), self.labels.len());
        self.labels.push(label.to_owned());
    }

    /// Number of distinct elements.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` if neither ranking contained any element.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Ordinal of `label`, if it is part of the set.
    pub fn ordinal(&self, label: &str) -> Option<usize> {
        self.ordinals.get(label).copied()
    }

    /// Label with the given ordinal.
    pub fn label(&self, ordinal: usize) -> Option<&str> {
        self.labels.get(ordinal).map(String::as_str)
    }

    /// All labels in ordinal order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns `true` if `label` is part of the set.
    pub fn contains(&self, label: &str) -> bool {
        self.ordinals.contains_key(label)
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// What went wrong when decoding a ranking payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormatKind {
    /// The payload is not well-formed JSON (or ends prematurely).
    Syntax,
    /// The payload is JSON but not an array of arrays of strings.
    Shape,
}

/// A ranking payload that does not decode into the expected nested-array shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFormatError {
    /// Whether the payload failed as JSON or as a ranking.
    pub kind: InputFormatKind,
    /// Decoder message.
    pub detail: String,
    /// 1-based line of the failure, when known.
    pub line: Option<usize>,
    /// 1-based column of the failure, when known.
    pub column: Option<usize>,
}

impl InputFormatError {
    fn from_json(err: &serde_json::Error) -> Self {
        let kind = match err.classify() {
            serde_json::error::Category::Data => InputFormatKind::Shape,
            serde_json::error::Category::Syntax
            | serde_json::error::Category::Eof
            | serde_json::error::Category::Io => InputFormatKind::Syntax,
        };
        // serde_json reports line 0 when no position applies.
        let (line, column) = if err.line() == 0 {
            (None, None)
        } else {
            (Some(err.line()), Some(err.column()))
        };
        Self {
            kind,
            detail: err.to_string(),
            line,
            column,
        }
    }
}

impl fmt::Display for InputFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            InputFormatKind::Syntax => write!(f, "invalid JSON: {}", self.detail),
            InputFormatKind::Shape => write!(
                f,
                "expected an array of clusters (arrays of strings): {}",
                self.detail
            ),
        }
    }
}

impl std::error::Error for InputFormatError {}

/// Decodes a JSON ranking payload.
///
/// # Errors
///
/// Returns [`InputFormatError`] with [`InputFormatKind::Syntax`] for malformed
/// JSON and [`InputFormatKind::Shape`] for JSON of the wrong shape (an object,
/// a flat array, numbers instead of labels, ...).
pub fn parse_ranking(payload: &str) -> Result<Ranking, InputFormatError> {
    serde_json::from_str(payload).map_err(|e| InputFormatError::from_json(&e))
}
