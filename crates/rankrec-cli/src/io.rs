/// File and stdin reading with size enforcement and UTF-8 validation.
///
/// This module is the single entry point for all input I/O in the `rankrec`
/// binary. `rankrec-core` never touches the filesystem; all reading happens
/// here, and decoded payloads are handed to [`rankrec_core::parse_side`].
///
/// - Disk files: size checked via `std::fs::metadata` before any read.
/// - Stdin: buffered with a `Read::take` cap so allocation is bounded.
/// - All I/O and decoding failures are [`CliError`] variants with exit code 2.
use std::io::Read as _;
use std::path::Path;

use rankrec_core::{Ranking, RankingSide, parse_side};

use crate::error::CliError;
use crate::{InputArgs, PathOrStdin};

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Reads and decodes both rankings named by `inputs`.
///
/// # Errors
///
/// Returns [`CliError::StdinUsedTwice`] if both inputs are `-`, otherwise the
/// first read or decode failure, first ranking before second.
pub fn read_rankings(inputs: &InputArgs, max_size: u64) -> Result<(Ranking, Ranking), CliError> {
    if inputs.first == PathOrStdin::Stdin && inputs.second == PathOrStdin::Stdin {
        return Err(CliError::StdinUsedTwice);
    }
    let first = read_ranking(&inputs.first, RankingSide::First, max_size)?;
    let second = read_ranking(&inputs.second, RankingSide::Second, max_size)?;
    tracing::debug!(
        first_clusters = first.len(),
        second_clusters = second.len(),
        "read rankings"
    );
    Ok((first, second))
}

/// Reads `source` and decodes it as the `side` ranking.
///
/// # Errors
///
/// Any [`read_input`] error, or [`CliError::InvalidRanking`] when the payload
/// is not a JSON array of clusters of strings.
pub fn read_ranking(
    source: &PathOrStdin,
    side: RankingSide,
    max_size: u64,
) -> Result<Ranking, CliError> {
    let payload = read_input(source, max_size)?;
    parse_side(&payload, side).map_err(|e| CliError::from_reconcile(e, &source.label()))
}

/// Reads the entire contents of `source` into a `String`.
///
/// # Errors
///
/// Returns [`CliError`] (exit code 2) for a missing or unreadable file, an
/// input over `max_size`, or bytes that are not UTF-8.
pub fn read_input(source: &PathOrStdin, max_size: u64) -> Result<String, CliError> {
    match source {
        PathOrStdin::Path(path) => read_file(path, max_size),
        PathOrStdin::Stdin => read_stdin(max_size),
    }
}

// ---------------------------------------------------------------------------
// Disk file reading
// ---------------------------------------------------------------------------

fn read_file(path: &Path, max_size: u64) -> Result<String, CliError> {
    let file_size = std::fs::metadata(path)
        .map_err(|e| io_error_to_cli(&e, path))?
        .len();

    if file_size > max_size {
        return Err(CliError::FileTooLarge {
            source: path.display().to_string(),
            limit: max_size,
            actual: Some(file_size),
        });
    }

    let bytes = std::fs::read(path).map_err(|e| io_error_to_cli(&e, path))?;
    bytes_to_string(bytes, &path.display().to_string())
}

/// Maps a `std::io::Error` from a disk-file operation to a [`CliError`].
fn io_error_to_cli(e: &std::io::Error, path: &Path) -> CliError {
    let kind = e.kind();
    if kind == std::io::ErrorKind::NotFound {
        CliError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else if kind == std::io::ErrorKind::PermissionDenied {
        CliError::PermissionDenied {
            path: path.to_path_buf(),
        }
    } else {
        CliError::IoError {
            source: path.display().to_string(),
            detail: e.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Stdin reading
// ---------------------------------------------------------------------------

/// Reads the entire stdin stream, capped at `max_size` bytes.
///
/// A stream of exactly `max_size` bytes gets one extra probe read to tell
/// "at the limit" from "over the limit".
fn read_stdin(max_size: u64) -> Result<String, CliError> {
    let stdin = std::io::stdin();
    let mut handle = stdin.lock();
    let mut buf: Vec<u8> = Vec::new();

    (&mut handle)
        .take(max_size)
        .read_to_end(&mut buf)
        .map_err(|e| CliError::StdinReadError {
            detail: e.to_string(),
        })?;

    if buf.len() as u64 == max_size {
        let mut probe = [0u8; 1];
        let extra = handle
            .read(&mut probe)
            .map_err(|e| CliError::StdinReadError {
                detail: e.to_string(),
            })?;
        if extra > 0 {
            return Err(CliError::FileTooLarge {
                source: "-".to_owned(),
                limit: max_size,
                actual: None,
            });
        }
    }

    bytes_to_string(buf, "-")
}

// ---------------------------------------------------------------------------
// UTF-8 conversion
// ---------------------------------------------------------------------------

fn bytes_to_string(bytes: Vec<u8>, source_label: &str) -> Result<String, CliError> {
    String::from_utf8(bytes).map_err(|e| CliError::InvalidUtf8 {
        source: source_label.to_owned(),
        byte_offset: e.utf8_error().valid_up_to(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
