//! Post-operation invariant checkers for correctness validation.

use std::collections::HashMap;

use rankrec_core::{
    ElementRelation, ElementSet, Ranking, ReconcileOutput, RelationMap, RelationModel, TieBreak,
};

/// Verifies that every element of `elements` appears in `ranking` exactly once
/// and that nothing else does.
pub fn check_placement(elements: &ElementSet, ranking: &Ranking) -> Result<(), String> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for label in ranking.labels() {
        *seen.entry(label).or_default() += 1;
    }
    for label in elements.labels() {
        match seen.get(label.as_str()) {
            Some(1) => {}
            Some(n) => return Err(format!("{label} placed {n} times")),
            None => return Err(format!("{label} not placed")),
        }
    }
    if seen.len() != elements.len() {
        return Err(format!(
            "ranking holds {} labels, element set has {}",
            seen.len(),
            elements.len()
        ));
    }
    Ok(())
}

/// Verifies that the closed relation is transitive and has no cycle.
pub fn check_closure(relations: &RelationMap) -> Result<(), String> {
    if !relations.is_transitive() {
        return Err("merged relation is not transitively closed".to_owned());
    }
    let cyclic = relations.cyclic_elements();
    if !cyclic.is_empty() {
        return Err(format!("merged relation is cyclic on {}", cyclic.join(", ")));
    }
    Ok(())
}

/// Verifies that every BEFORE pair of `relations` lands in strictly earlier
/// clusters of `ranking`.
pub fn check_respects_relation(relations: &RelationMap, ranking: &Ranking) -> Result<(), String> {
    let index: HashMap<&str, usize> = ranking
        .clusters()
        .iter()
        .enumerate()
        .flat_map(|(i, cluster)| cluster.iter().map(move |label| (label.as_str(), i)))
        .collect();
    for (a, b) in relations.before_pairs() {
        let (Some(ia), Some(ib)) = (index.get(a), index.get(b)) else {
            return Err(format!("{a} or {b} missing from ranking"));
        };
        if ia >= ib {
            return Err(format!("{a} before {b} but placed in clusters {ia} and {ib}"));
        }
    }
    Ok(())
}

/// Verifies the contradiction core against both relation models:
/// each flagged pair is a direct reversal, and the count matches a full scan.
pub fn check_contradictions(
    elements: &ElementSet,
    first: &RelationModel,
    second: &RelationModel,
    output: &ReconcileOutput,
) -> Result<(), String> {
    for pair in &output.contradictions {
        let r1 = first.relation(pair.first(), pair.second());
        let r2 = second.relation(pair.first(), pair.second());
        if !r1.is_directional() || r2 != r1.inverse() {
            return Err(format!("{pair} flagged but relations are {r1} / {r2}"));
        }
    }

    let labels = elements.labels();
    let mut expected = 0usize;
    for (i, a) in labels.iter().enumerate() {
        for b in &labels[i + 1..] {
            let r1 = first.relation(a, b);
            if r1.is_directional() && second.relation(a, b) == r1.inverse() {
                expected += 1;
            }
        }
    }
    if expected != output.contradictions.len() {
        return Err(format!(
            "expected {expected} contradictions, found {}",
            output.contradictions.len()
        ));
    }
    Ok(())
}

/// Verifies that members of each output cluster are tied in both inputs.
///
/// Only meaningful for topological layering.
pub fn check_clusters_are_ties(
    first: &RelationModel,
    second: &RelationModel,
    ranking: &Ranking,
) -> Result<(), String> {
    for cluster in ranking.clusters() {
        for pair in cluster.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            for model in [first, second] {
                if model.relation(a, b) != ElementRelation::Same {
                    return Err(format!("{a} and {b} share a cluster but are not tied"));
                }
            }
        }
    }
    Ok(())
}

/// Runs every checker above for one reconciliation under default policies.
pub fn check_reconcile_invariants(
    first: &Ranking,
    second: &Ranking,
    output: &ReconcileOutput,
) -> Result<(), String> {
    let elements = ElementSet::from_rankings(first, second);
    let m1 = RelationModel::new(first);
    let m2 = RelationModel::new(second);
    let relations = RelationMap::merge(elements.clone(), &m1, &m2, TieBreak::default());

    check_placement(&elements, &output.consistent_ranking)?;
    check_closure(&relations)?;
    check_respects_relation(&relations, &output.consistent_ranking)?;
    check_contradictions(&elements, &m1, &m2, output)?;
    check_clusters_are_ties(&m1, &m2, &output.consistent_ranking)
}
