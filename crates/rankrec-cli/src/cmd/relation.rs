//! Implementation of `rankrec relation <first> <second> <a> <b>`.
//!
//! Explains one pair: its relation in each ranking, after merging, and
//! whether it is a contradiction.
use rankrec_core::{Ranking, explain_pair};

use crate::error::CliError;
use crate::format::{write_json, write_pair_report};
use crate::io::read_rankings;
use crate::{InputArgs, OutputFormat, PairPolicyArgs};

/// Runs the `relation` command.
///
/// # Errors
///
/// - Any read or decode error from [`read_rankings`] (exit 2).
/// - [`CliError::UnknownElement`] if `a` or `b` is in neither ranking (exit 1).
pub fn run(
    inputs: &InputArgs,
    a: &str,
    b: &str,
    policy: &PairPolicyArgs,
    format: OutputFormat,
    max_file_size: u64,
) -> Result<(), CliError> {
    let (first, second) = read_rankings(inputs, max_file_size)?;
    for label in [a, b] {
        if !contains(&first, label) && !contains(&second, label) {
            return Err(CliError::UnknownElement {
                label: label.to_owned(),
            });
        }
    }

    let report = explain_pair(&first, &second, a, b, &policy.to_config());

    let mut out = std::io::stdout().lock();
    let written = match format {
        OutputFormat::Human => write_pair_report(&mut out, &report),
        OutputFormat::Json => write_json(&mut out, &report),
    };
    written.map_err(|e| CliError::stream("stdout", &e))
}

fn contains(ranking: &Ranking, label: &str) -> bool {
    ranking.labels().any(|l| l == label)
}
