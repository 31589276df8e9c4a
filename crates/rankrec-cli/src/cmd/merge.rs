//! Implementation of `rankrec merge <first> <second>`.
//!
//! Like `reconcile`, but prints only the consistent ranking. In JSON mode the
//! output is the bare array of clusters, ready to feed back in as an input.
use rankrec_core::reconcile_with_config;

use crate::error::CliError;
use crate::format::{write_json, write_ranking, write_warnings};
use crate::io::read_rankings;
use crate::{InputArgs, OutputFormat, PolicyArgs};

/// Runs the `merge` command.
///
/// # Errors
///
/// Same as [`crate::cmd::reconcile::run`].
pub fn run(
    inputs: &InputArgs,
    policy: &PolicyArgs,
    format: OutputFormat,
    quiet: bool,
    max_file_size: u64,
) -> Result<(), CliError> {
    let (first, second) = read_rankings(inputs, max_file_size)?;
    let output = reconcile_with_config(&first, &second, &policy.to_config())
        .map_err(|e| CliError::from_reconcile(e, "input"))?;

    if !quiet {
        write_warnings(&mut std::io::stderr().lock(), &output.warnings)
            .map_err(|e| CliError::stream("stderr", &e))?;
    }

    let mut out = std::io::stdout().lock();
    let written = match format {
        OutputFormat::Human => write_ranking(&mut out, &output.consistent_ranking),
        OutputFormat::Json => write_json(&mut out, &output.consistent_ranking),
    };
    written.map_err(|e| CliError::stream("stdout", &e))
}
