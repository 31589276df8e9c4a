//! Implementation of `rankrec contradictions <first> <second>`.
//!
//! Prints only the contradiction core. No merge or layering runs, so tie-break
//! and cycle policies do not apply.
use rankrec_core::{ElementSet, RelationModel, find_contradictions};

use crate::error::CliError;
use crate::format::{write_contradictions, write_json};
use crate::io::read_rankings;
use crate::{ComparatorArg, InputArgs, OutputFormat};

/// Runs the `contradictions` command.
///
/// JSON output is the bare array of `[a, b]` pairs.
///
/// # Errors
///
/// Any read or decode error from [`read_rankings`] (exit 2).
pub fn run(
    inputs: &InputArgs,
    comparator: ComparatorArg,
    format: OutputFormat,
    max_file_size: u64,
) -> Result<(), CliError> {
    let (first, second) = read_rankings(inputs, max_file_size)?;
    let comparator = comparator.into();
    let elements = ElementSet::from_rankings(&first, &second);
    let pairs = find_contradictions(
        &elements,
        &RelationModel::with_comparator(&first, comparator),
        &RelationModel::with_comparator(&second, comparator),
    );
    tracing::debug!(
        elements = elements.len(),
        contradictions = pairs.len(),
        "contradiction scan"
    );

    let mut out = std::io::stdout().lock();
    let written = match format {
        OutputFormat::Human => write_contradictions(&mut out, &pairs),
        OutputFormat::Json => write_json(&mut out, &pairs),
    };
    written.map_err(|e| CliError::stream("stdout", &e))
}
