//! Hand-traced reconciliation scenarios through the public API.
#![allow(clippy::expect_used)]

use rankrec_core::{
    ElementPair, Ranking, ReconcileConfig, ReconcileError, parse_ranking, reconcile,
    reconcile_json, reconcile_payload,
};

fn ranking(clusters: &[&[&str]]) -> Ranking {
    Ranking::from_labels(clusters.iter().map(|c| c.iter().copied()))
}

/// R1 = [[a,b],[c],[d,e]], R2 = [[a],[b,c],[d],[e]].
///
/// Every pair is either ordered the same way in both or tied on one side, so
/// the merge yields the strict order a < b < c < d < e.
#[test]
fn scenario_tie_refinement() {
    let first = ranking(&[&["a", "b"], &["c"], &["d", "e"]]);
    let second = ranking(&[&["a"], &["b", "c"], &["d"], &["e"]]);
    let output = reconcile(&first, &second).expect("reconcile");
    assert!(output.contradictions.is_empty());
    assert_eq!(
        output.consistent_ranking,
        ranking(&[&["a"], &["b"], &["c"], &["d"], &["e"]])
    );
}

/// R1 = [[x,y],[z]], R2 = [[y],[x,z]]: the tie on x/y yields to y < x.
#[test]
fn scenario_tie_yields_to_order() {
    let first = ranking(&[&["x", "y"], &["z"]]);
    let second = ranking(&[&["y"], &["x", "z"]]);
    let output = reconcile(&first, &second).expect("reconcile");
    assert!(output.contradictions.is_empty());
    assert_eq!(
        output.consistent_ranking,
        ranking(&[&["y"], &["x"], &["z"]])
    );
}

/// R1 = [[a],[b],[z]], R2 = [[a],[b]].
///
/// z is unknown to the second ranking, so neither a/z nor b/z is constrained.
/// z is free from the first layer and lands before b even though the first
/// ranking places it last.
#[test]
fn scenario_one_sided_element_is_unconstrained() {
    let first = ranking(&[&["a"], &["b"], &["z"]]);
    let second = ranking(&[&["a"], &["b"]]);
    let output = reconcile(&first, &second).expect("reconcile");
    assert!(output.contradictions.is_empty());
    assert_eq!(
        output.consistent_ranking,
        ranking(&[&["a"], &["z"], &["b"]])
    );
}

#[test]
fn scenario_shared_tie_stays_grouped() {
    let first = ranking(&[&["A", "B"], &["C"], &["D", "E"]]);
    let second = ranking(&[&["A"], &["B", "C"], &["D", "E"]]);
    let output = reconcile(&first, &second).expect("reconcile");
    assert!(output.contradictions.is_empty());
    assert_eq!(
        output.consistent_ranking,
        ranking(&[&["A"], &["B"], &["C"], &["D", "E"]])
    );
}

#[test]
fn scenario_partial_swap() {
    let first = ranking(&[&["1"], &["2", "3"], &["4"], &["5"]]);
    let second = ranking(&[&["2"], &["1"], &["3"], &["5"], &["4"]]);
    let output = reconcile(&first, &second).expect("reconcile");
    assert_eq!(
        output.contradictions,
        vec![ElementPair::new("1", "2"), ElementPair::new("4", "5")]
    );
    // 1 < 2 and 4 < 5 by first-ranking-wins; 2 < 3 from the second ranking.
    assert_eq!(
        output.consistent_ranking,
        ranking(&[&["1"], &["2"], &["3"], &["4"], &["5"]])
    );
}

#[test]
fn empty_rankings() {
    let output = reconcile(&Ranking::default(), &Ranking::default()).expect("reconcile");
    assert!(output.contradictions.is_empty());
    assert!(output.consistent_ranking.is_empty());
}

#[test]
fn one_empty_ranking_keeps_elements_unconstrained() {
    let first = ranking(&[&["a"], &["b"]]);
    let output = reconcile(&first, &Ranking::default()).expect("reconcile");
    assert!(output.contradictions.is_empty());
    assert_eq!(output.consistent_ranking, ranking(&[&["a"], &["b"]]));
}

#[test]
fn disjoint_rankings() {
    let first = ranking(&[&["a", "b"], &["c"]]);
    let second = ranking(&[&["x"], &["y", "z"]]);
    let output = reconcile(&first, &second).expect("reconcile");
    assert!(output.contradictions.is_empty());
    assert_eq!(
        output.consistent_ranking,
        ranking(&[&["a"], &["b"], &["c"], &["x"], &["y"], &["z"]])
    );
}

#[test]
fn self_merge_is_identity() {
    let r = ranking(&[&["p", "q", "r"], &["s"], &["t", "u"]]);
    let output = reconcile(&r, &r).expect("reconcile");
    assert!(output.contradictions.is_empty());
    assert_eq!(output.consistent_ranking, r);
}

#[test]
fn json_boundary_end_to_end() {
    let json = reconcile_json(
        r#"[["A", "B"], ["C"], ["D", "E"]]"#,
        r#"[["A"], ["B", "C"], ["D", "E"]]"#,
        &ReconcileConfig::default(),
    )
    .expect("reconcile_json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
    assert_eq!(
        value,
        serde_json::json!({
            "contradictions": [],
            "consistent_ranking": [["A"], ["B"], ["C"], ["D", "E"]],
        })
    );
}

#[test]
fn json_boundary_rejects_non_ranking() {
    let err = reconcile_json("[1, 2]", "[]", &ReconcileConfig::default())
        .expect_err("flat numbers are not a ranking");
    assert!(err.is_input_error());
    assert!(matches!(err, ReconcileError::InputFormat { .. }));

    let payload = reconcile_payload("[1, 2]", "[]", &ReconcileConfig::default());
    assert_eq!(payload["error"]["kind"], "input_format");
}

#[test]
fn parsed_ranking_feeds_reconcile() {
    let first = parse_ranking(r#"[["a"], ["b"]]"#).expect("parse");
    let second = parse_ranking(r#"[["b"], ["a"]]"#).expect("parse");
    let output = reconcile(&first, &second).expect("reconcile");
    assert_eq!(output.contradictions, vec![ElementPair::new("a", "b")]);
    assert_eq!(output.consistent_ranking, first);
}
