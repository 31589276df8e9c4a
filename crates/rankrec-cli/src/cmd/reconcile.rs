//! Implementation of `rankrec reconcile <first> <second>`.
//!
//! Reads both rankings, runs the full pipeline, and writes the contradiction
//! core and the consistent ranking to stdout.
//!
//! Exit codes:
//! - 0 = success
//! - 1 = merged relation is cyclic under `--cycle-policy strict`
//! - 2 = a ranking could not be read or decoded
use rankrec_core::reconcile_with_config;

use crate::error::CliError;
use crate::format::{write_json, write_reconcile, write_warnings};
use crate::io::read_rankings;
use crate::{InputArgs, OutputFormat, PolicyArgs};

/// Runs the `reconcile` command.
///
/// In human mode warnings go to stderr (unless `quiet`); in JSON mode they
/// are part of the payload.
///
/// # Errors
///
/// - [`CliError::InvalidRanking`] and the other read errors (exit 2).
/// - [`CliError::CycleDetected`] under the strict cycle policy (exit 1).
pub fn run(
    inputs: &InputArgs,
    policy: &PolicyArgs,
    format: OutputFormat,
    quiet: bool,
    max_file_size: u64,
) -> Result<(), CliError> {
    let (first, second) = read_rankings(inputs, max_file_size)?;
    let config = policy.to_config();
    let output = reconcile_with_config(&first, &second, &config)
        .map_err(|e| CliError::from_reconcile(e, "input"))?;

    tracing::info!(
        contradictions = output.contradictions.len(),
        clusters = output.consistent_ranking.len(),
        "reconciled"
    );

    match format {
        OutputFormat::Human => {
            if !quiet {
                write_warnings(&mut std::io::stderr().lock(), &output.warnings)
                    .map_err(|e| CliError::stream("stderr", &e))?;
            }
            write_reconcile(&mut std::io::stdout().lock(), &output)
                .map_err(|e| CliError::stream("stdout", &e))
        }
        OutputFormat::Json => write_json(&mut std::io::stdout().lock(), &output)
            .map_err(|e| CliError::stream("stdout", &e)),
    }
}
