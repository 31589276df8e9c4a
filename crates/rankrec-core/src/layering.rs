/// Consistent-ranking construction from a closed [`RelationMap`].
///
/// # Topological layering
///
/// [`build_consistent_ranking`] loads the BEFORE relation into a `petgraph`
/// `StableDiGraph` and runs a batched variant of Kahn's algorithm: every
/// round takes *all* unplaced elements whose in-degree is zero (in element-set
/// order), commits them as one layer, and only then decrements the in-degrees
/// of their successors. Each layer is split into clusters by walking it in
/// selection order and starting a new cluster whenever two neighbours are not
/// tied in both source rankings.
///
/// A round with no zero-in-degree element means the relation is cyclic. The
/// [`CyclePolicy`] decides whether to place the first unplaced element alone
/// and continue, or to fail with [`CycleError`].
///
/// # Dominance layering
///
/// [`build_dominance_ranking`] ignores the merged relation. It orders elements
/// by how many others both rankings agree they precede and clusters runs of
/// equal strength.
use std::fmt;

use petgraph::Direction;
use petgraph::stable_graph::{NodeIndex, StableDiGraph};

use crate::merge::RelationMap;
use crate::ranking::{ElementSet, Ranking};
use crate::relation::{ElementRelation, RelationModel, same_in_both};

/// What to do when no element is free of predecessors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CyclePolicy {
    /// Place the first unplaced element (element-set order) on its own and
    /// record it in [`LayeringOutcome::broken_cycles`].
    #[default]
    BreakFirst,
    /// Fail with [`CycleError`].
    Strict,
}

/// Which ranking construction to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Layering {
    /// [`build_consistent_ranking`].
    #[default]
    Topological,
    /// [`build_dominance_ranking`].
    Dominance,
}

/// Result of [`build_consistent_ranking`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayeringOutcome {
    /// The consistent ranking.
    pub ranking: Ranking,
    /// Elements placed by [`CyclePolicy::BreakFirst`], in placement order.
    pub broken_cycles: Vec<String>,
}

/// The relation is cyclic and [`CyclePolicy::Strict`] is in effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleError {
    /// Elements that could not be placed, in element-set order.
    pub unplaced: Vec<String>,
}

impl fmt::Display for CycleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "merged relation is cyclic; {} element(s) could not be placed: {}",
            self.unplaced.len(),
            self.unplaced.join(", ")
        )
    }
}

impl std::error::Error for CycleError {}

/// Builds the consistent ranking by topological layering.
///
/// `first` and `second` are only consulted to split layers into clusters.
///
/// # Errors
///
/// Returns [`CycleError`] when the relation is cyclic and `policy` is
/// [`CyclePolicy::Strict`].
pub fn build_consistent_ranking(
    relations: &RelationMap,
    first: &RelationModel,
    second: &RelationModel,
    policy: CyclePolicy,
) -> Result<LayeringOutcome, CycleError> {
    let labels = relations.elements().labels();
    let n = labels.len();

    let mut graph: StableDiGraph<usize, ()> =
        StableDiGraph::with_capacity(n, relations.edge_count());
    let nodes: Vec<NodeIndex> = (0..n).map(|i| graph.add_node(i)).collect();
    for (i, &source) in nodes.iter().enumerate() {
        for j in relations.successors(i) {
            graph.add_edge(source, nodes[j], ());
        }
    }

    let mut in_degree: Vec<usize> = nodes
        .iter()
        .map(|&node| graph.neighbors_directed(node, Direction::Incoming).count())
        .collect();
    let mut placed = vec![false; n];
    let mut remaining = n;
    let mut clusters: Vec<Vec<String>> = Vec::new();
    let mut broken_cycles = Vec::new();

    while remaining > 0 {
        let mut ready: Vec<usize> = (0..n)
            .filter(|&i| !placed[i] && in_degree[i] == 0)
            .collect();

        if ready.is_empty() {
            match policy {
                CyclePolicy::Strict => {
                    return Err(CycleError {
                        unplaced: (0..n)
                            .filter(|&i| !placed[i])
                            .map(|i| labels[i].clone())
                            .collect(),
                    });
                }
                CyclePolicy::BreakFirst => {
                    let Some(forced) = (0..n).find(|&i| !placed[i]) else {
                        break;
                    };
                    tracing::warn!(
                        element = %labels[forced],
                        "no unconstrained element left; breaking cycle"
                    );
                    broken_cycles.push(labels[forced].clone());
                    ready.push(forced);
                }
            }
        }

        for &i in &ready {
            placed[i] = true;
        }
        remaining -= ready.len();

        // Decrement only after the whole layer is committed.
        for &i in &ready {
            for succ in graph.neighbors_directed(nodes[i], Direction::Outgoing) {
                let j = graph[succ];
                in_degree[j] = in_degree[j].saturating_sub(1);
            }
        }

        split_layer(&ready, labels, first, second, &mut clusters);
    }

    tracing::debug!(
        clusters = clusters.len(),
        broken = broken_cycles.len(),
        "built consistent ranking"
    );

    Ok(LayeringOutcome {
        ranking: Ranking::new(clusters),
        broken_cycles,
    })
}

/// Appends the clusters of one layer to `clusters`.
fn split_layer(
    layer: &[usize],
    labels: &[String],
    first: &RelationModel,
    second: &RelationModel,
    clusters: &mut Vec<Vec<String>>,
) {
    let mut current: Vec<String> = Vec::new();
    let mut previous: Option<&str> = None;

    for &i in layer {
        let label = labels[i].as_str();
        if let Some(prev) = previous {
            if !same_in_both(first, second, prev, label) {
                clusters.push(std::mem::take(&mut current));
            }
        }
        current.push(label.to_owned());
        previous = Some(label);
    }

    if !current.is_empty() {
        clusters.push(current);
    }
}

/// Builds a ranking by dominance strength.
///
/// The strength of an element is the number of other elements that *both*
/// rankings place it before. Reversed pairs, pairs tied in either ranking and
/// pairs unknown to either ranking count for neither side. Elements are
/// sorted by descending strength (ties keep element-set order) and each run
/// of equal strength becomes one cluster.
pub fn build_dominance_ranking(
    elements: &ElementSet,
    first: &RelationModel,
    second: &RelationModel,
) -> Ranking {
    let labels = elements.labels();
    let strength: Vec<usize> = labels
        .iter()
        .map(|a| {
            labels
                .iter()
                .filter(|&b| {
                    a != b
                        && first.relation(a, b) == ElementRelation::Before
                        && second.relation(a, b) == ElementRelation::Before
                })
                .count()
        })
        .collect();

    let mut order: Vec<usize> = (0..labels.len()).collect();
    order.sort_by(|&a, &b| strength[b].cmp(&strength[a]));

    let mut clusters: Vec<Vec<String>> = Vec::new();
    let mut current_strength: Option<usize> = None;
    for i in order {
        if current_strength == Some(strength[i]) {
            if let Some(last) = clusters.last_mut() {
                last.push(labels[i].clone());
                continue;
            }
        }
        clusters.push(vec![labels[i].clone()]);
        current_strength = Some(strength[i]);
    }

    tracing::debug!(clusters = clusters.len(), "built dominance ranking");
    Ranking::new(clusters)
}
