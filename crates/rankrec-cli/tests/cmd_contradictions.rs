//! Integration tests for `rankrec contradictions`.
#![allow(clippy::expect_used)]

use std::path::PathBuf;
use std::process::{Command, Output};

/// Path to the compiled `rankrec` binary.
fn rankrec_bin() -> PathBuf {
    let mut path = std::env::current_exe().expect("current exe");
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.push("rankrec");
    path
}

/// Path to a shared fixture file.
fn fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("../../tests/fixtures");
    path.push(name);
    path.to_str().expect("fixture path is UTF-8").to_owned()
}

fn run(args: &[&str]) -> Output {
    Command::new(rankrec_bin())
        .args(args)
        .env_remove("RANKREC_TIE_BREAK")
        .env_remove("RANKREC_MAX_FILE_SIZE")
        .env_remove("RUST_LOG")
        .output()
        .expect("run rankrec")
}

fn stdout_json(out: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&out.stdout);
    serde_json::from_str(stdout.trim()).expect("stdout should be JSON")
}

// ---------------------------------------------------------------------------

#[test]
fn contradictions_json_is_bare_pair_array() {
    let out = run(&[
        "contradictions",
        &fixture("swap-a.json"),
        &fixture("swap-b.json"),
        "--format",
        "json",
    ]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        stdout_json(&out),
        serde_json::json!([["1", "2"], ["4", "5"]])
    );
}

#[test]
fn contradictions_empty_when_consistent() {
    let out = run(&[
        "contradictions",
        &fixture("experts-a.json"),
        &fixture("experts-b.json"),
        "-f",
        "json",
    ]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout_json(&out), serde_json::json!([]));
}

#[test]
fn contradictions_human_lists_pairs() {
    let out = run(&[
        "contradictions",
        &fixture("swap-a.json"),
        &fixture("swap-b.json"),
    ]);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout, "  1 / 2\n  4 / 5\n");
}

/// Under the position comparator, order inside a cluster counts, so the tie
/// on 2/3 in the first ranking becomes 2 before 3 and agrees with the second.
#[test]
fn position_comparator_keeps_core() {
    let out = run(&[
        "contradictions",
        &fixture("swap-a.json"),
        &fixture("swap-b.json"),
        "--comparator",
        "position",
        "-f",
        "json",
    ]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        stdout_json(&out),
        serde_json::json!([["1", "2"], ["4", "5"]])
    );
}

#[test]
fn contradictions_malformed_second_exits_2() {
    let out = run(&[
        "contradictions",
        &fixture("experts-a.json"),
        &fixture("malformed.json"),
        "-f",
        "json",
    ]);
    assert_eq!(out.status.code(), Some(2));
    let value = stdout_json(&out);
    assert_eq!(value["error"]["kind"], "input_format");
    assert_eq!(value["error"]["ranking"], "second");
}
