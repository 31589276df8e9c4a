//! Integration tests for `rankrec relation`.
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
fn relation_json_for_contradicting_pair() {
    let out = run(&[
        "relation",
        &fixture("swap-a.json"),
        &fixture("swap-b.json"),
        "1",
        "2",
        "-f",
        "json",
    ]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        stdout_json(&out),
        serde_json::json!({
            "a": "1",
            "b": "2",
            "first": "before",
            "second": "after",
            "merged": "before",
            "contradiction": true,
        })
    );
}

#[test]
fn relation_follows_tie_break() {
    let out = run(&[
        "relation",
        &fixture("swap-a.json"),
        &fixture("swap-b.json"),
        "1",
        "2",
        "--tie-break",
        "second",
        "-f",
        "json",
    ]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout_json(&out)["merged"], "after");
}

#[test]
fn relation_shows_closure() {
    // d and e are tied in the first ranking and ordered in the second.
    let out = run(&[
        "relation",
        &fixture("experts-a.json"),
        &fixture("experts-b.json"),
        "e",
        "d",
    ]);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("first:         e same d"), "{stdout}");
    assert!(stdout.contains("second:        e after d"), "{stdout}");
    assert!(stdout.contains("merged:        e after d"), "{stdout}");
    assert!(stdout.contains("contradiction: no"), "{stdout}");
}

#[test]
fn relation_unknown_element_exits_1() {
    let out = run(&[
        "relation",
        &fixture("experts-a.json"),
        &fixture("experts-b.json"),
        "a",
        "zz",
        "-f",
        "json",
    ]);
    assert_eq!(out.status.code(), Some(1));
    let value = stdout_json(&out);
    assert_eq!(value["error"]["kind"], "processing");
    assert!(String::from_utf8_lossy(&out.stderr).contains("'zz'"));
}

/// Layering flags do not apply to a single pair and are a usage error.
#[test]
fn relation_rejects_layering_flag() {
    let out = run(&[
        "relation",
        &fixture("swap-a.json"),
        &fixture("swap-b.json"),
        "1",
        "2",
        "--layering",
        "dominance",
    ]);
    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("--layering"));
}
