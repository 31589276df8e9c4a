#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(clippy::wildcard_enum_match_arm)]

use clap::CommandFactory;

use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).expect("arguments should parse")
}

/// The root help output must contain all top-level subcommand names.
#[test]
fn test_root_help_lists_all_subcommands() {
    let mut cmd = Cli::command();
    let help = format!("{}", cmd.render_help());

    for name in ["reconcile", "contradictions", "merge", "relation"] {
        assert!(
            help.contains(name),
            "root help should mention subcommand '{name}'"
        );
    }
}

/// The root help output must describe every global flag.
#[test]
fn test_root_help_lists_global_flags() {
    let mut cmd = Cli::command();
    let help = format!("{}", cmd.render_help());

    for flag in [
        "--format",
        "--quiet",
        "--verbose",
        "--max-file-size",
        "--help",
        "--version",
    ] {
        assert!(
            help.contains(flag),
            "root help should mention flag '{flag}'"
        );
    }
}

/// `rankrec reconcile --help` must mention every policy flag.
#[test]
fn test_reconcile_help() {
    let mut cmd = Cli::command();
    let sub = cmd
        .find_subcommand_mut("reconcile")
        .expect("reconcile subcommand should exist");
    let help = format!("{}", sub.render_help());
    for flag in ["--tie-break", "--cycle-policy", "--comparator", "--layering"] {
        assert!(help.contains(flag), "reconcile help should mention {flag}");
    }
    assert!(help.contains("FIRST"));
    assert!(help.contains("SECOND"));
}

#[test]
fn test_clap_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn defaults_map_to_default_config() {
    let cli = parse(&["rankrec", "reconcile", "a.json", "b.json"]);
    match cli.command {
        Command::Reconcile { inputs, policy } => {
            assert_eq!(inputs.first, PathOrStdin::Path(PathBuf::from("a.json")));
            assert_eq!(inputs.second, PathOrStdin::Path(PathBuf::from("b.json")));
            assert_eq!(policy.to_config(), ReconcileConfig::default());
        }
        _ => panic!("expected reconcile"),
    }
    assert_eq!(cli.format, OutputFormat::Human);
    assert_eq!(cli.max_file_size, 16_777_216);
}

#[test]
fn policy_flags_map_to_config() {
    let cli = parse(&[
        "rankrec",
        "merge",
        "a.json",
        "-",
        "--tie-break",
        "second",
        "--cycle-policy",
        "strict",
        "--comparator",
        "position",
        "--layering",
        "dominance",
    ]);
    match cli.command {
        Command::Merge { inputs, policy } => {
            assert_eq!(inputs.second, PathOrStdin::Stdin);
            let config = policy.to_config();
            assert_eq!(config.tie_break, TieBreak::SecondRanking);
            assert_eq!(config.cycle_policy, CyclePolicy::Strict);
            assert_eq!(config.comparator, Comparator::Position);
            assert_eq!(config.layering, Layering::Dominance);
        }
        _ => panic!("expected merge"),
    }
}

#[test]
fn relation_takes_two_labels() {
    let cli = parse(&["rankrec", "relation", "a.json", "b.json", "x", "y"]);
    match cli.command {
        Command::Relation { a, b, .. } => {
            assert_eq!(a, "x");
            assert_eq!(b, "y");
        }
        _ => panic!("expected relation"),
    }
}

#[test]
fn relation_maps_pair_policies() {
    let cli = parse(&[
        "rankrec",
        "relation",
        "a.json",
        "b.json",
        "x",
        "y",
        "--tie-break",
        "ignore",
        "--comparator",
        "position",
    ]);
    match cli.command {
        Command::Relation { policy, .. } => {
            let config = policy.to_config();
            assert_eq!(config.tie_break, TieBreak::Ignore);
            assert_eq!(config.comparator, Comparator::Position);
            assert_eq!(config.cycle_policy, CyclePolicy::default());
            assert_eq!(config.layering, Layering::default());
        }
        _ => panic!("expected relation"),
    }
}

#[test]
fn relation_rejects_layering_flags() {
    for flag in [["--layering", "dominance"], ["--cycle-policy", "strict"]] {
        let mut args = vec!["rankrec", "relation", "a.json", "b.json", "x", "y"];
        args.extend(flag);
        assert!(Cli::try_parse_from(args).is_err(), "{flag:?} should be rejected");
    }
}

#[test]
fn global_flags_after_subcommand() {
    let cli = parse(&[
        "rankrec",
        "contradictions",
        "a.json",
        "b.json",
        "--format",
        "json",
        "-q",
    ]);
    assert_eq!(cli.format, OutputFormat::Json);
    assert!(cli.quiet);
}

#[test]
fn quiet_conflicts_with_verbose() {
    let result = Cli::try_parse_from(["rankrec", "-q", "-v", "merge", "a.json", "b.json"]);
    assert!(result.is_err());
}

#[test]
fn missing_second_input_is_rejected() {
    let result = Cli::try_parse_from(["rankrec", "reconcile", "a.json"]);
    assert!(result.is_err());
}

#[test]
fn unknown_tie_break_is_rejected() {
    let result = Cli::try_parse_from([
        "rankrec",
        "reconcile",
        "a.json",
        "b.json",
        "--tie-break",
        "coin-flip",
    ]);
    assert!(result.is_err());
}

#[test]
fn path_or_stdin_label() {
    assert_eq!(PathOrStdin::Stdin.label(), "-");
    assert_eq!(
        PathOrStdin::Path(PathBuf::from("experts/a.json")).label(),
        "experts/a.json"
    );
}
