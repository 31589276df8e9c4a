/// CLI error types with associated exit codes.
///
/// [`CliError`] is the top-level error type for the `rankrec` binary. Every
/// variant maps to a stable exit code (1 or 2) via [`CliError::exit_code`]:
///
/// - Exit code **2**: input failure. A ranking could not be read or is not a
///   JSON array of clusters of strings. Nothing has been reconciled.
/// - Exit code **1**: logical failure. Both inputs are valid but the request
///   cannot be answered (strict cycle policy, unknown element label).
use std::fmt;
use std::path::PathBuf;

use rankrec_core::{InputFormatError, RankingSide, ReconcileError};

// ---------------------------------------------------------------------------
// CliError
// ---------------------------------------------------------------------------

/// All error conditions that the `rankrec` CLI can produce.
#[derive(Debug)]
pub enum CliError {
    // --- Exit code 2: input failures ---
    /// A file argument could not be found on the filesystem.
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The process lacks permission to read a file.
    PermissionDenied {
        /// The path that could not be read.
        path: PathBuf,
    },

    /// The input exceeds the configured `--max-file-size` limit.
    FileTooLarge {
        /// `"-"` for stdin, or the filesystem path.
        source: String,
        /// The configured size limit in bytes.
        limit: u64,
        /// The actual size in bytes; `None` for stdin.
        actual: Option<u64>,
    },

    /// The input bytes are not valid UTF-8.
    InvalidUtf8 {
        /// `"-"` for stdin, or the filesystem path.
        source: String,
        /// The byte offset of the first invalid byte sequence.
        byte_offset: usize,
    },

    /// An I/O error occurred while reading from stdin.
    StdinReadError {
        /// The underlying I/O error message.
        detail: String,
    },

    /// Both rankings were requested from stdin.
    StdinUsedTwice,

    /// A generic I/O error not covered by the more specific variants above.
    IoError {
        /// The file, stream or `"stdout"`/`"stderr"` involved.
        source: String,
        /// The underlying I/O error message.
        detail: String,
    },

    /// A ranking payload is not a JSON array of clusters of strings.
    InvalidRanking {
        /// `"-"` for stdin, or the filesystem path.
        source: String,
        /// Which of the two inputs failed.
        side: RankingSide,
        /// The parse failure.
        error: InputFormatError,
    },

    // --- Exit code 1: logical failures ---
    /// The merged relation is cyclic and the strict cycle policy is active.
    CycleDetected {
        /// Elements left unplaced, in element order.
        unplaced: Vec<String>,
    },

    /// `relation` was asked about a label neither ranking contains.
    UnknownElement {
        /// The unknown label.
        label: String,
    },

    /// Serialization of the output failed.
    InternalError {
        /// Description of the failure.
        detail: String,
    },
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::FileTooLarge { .. }
            | Self::InvalidUtf8 { .. }
            | Self::StdinReadError { .. }
            | Self::StdinUsedTwice
            | Self::IoError { .. }
            | Self::InvalidRanking { .. } => 2,

            Self::CycleDetected { .. }
            | Self::UnknownElement { .. }
            | Self::InternalError { .. } => 1,
        }
    }

    /// Returns a human-readable error message suitable for printing to stderr.
    pub fn message(&self) -> String {
        match self {
            Self::FileNotFound { path } => {
                format!("error: file not found: {}", path.display())
            }
            Self::PermissionDenied { path } => {
                format!("error: permission denied: {}", path.display())
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: Some(actual),
            } => {
                format!("error: file too large: {source} is {actual} bytes, limit is {limit} bytes")
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: None,
            } => {
                format!("error: file too large: {source} exceeded limit of {limit} bytes")
            }
            Self::InvalidUtf8 {
                source,
                byte_offset,
            } => {
                format!(
                    "error: invalid UTF-8 in {source}: first invalid byte at offset {byte_offset}"
                )
            }
            Self::StdinReadError { detail } => {
                format!("error: failed to read stdin: {detail}")
            }
            Self::StdinUsedTwice => {
                "error: only one of FIRST and SECOND may be read from stdin".to_owned()
            }
            Self::IoError { source, detail } => {
                format!("error: I/O error on {source}: {detail}")
            }
            Self::InvalidRanking {
                source,
                side,
                error,
            } => {
                format!("error: {side} ranking ({source}) is invalid: {error}")
            }
            Self::CycleDetected { unplaced } => {
                format!(
                    "error: merged relation is cyclic; {} element(s) could not be placed: {}",
                    unplaced.len(),
                    unplaced.join(", ")
                )
            }
            Self::UnknownElement { label } => {
                format!("error: element '{label}' appears in neither ranking")
            }
            Self::InternalError { detail } => {
                format!("error: internal error: {detail}")
            }
        }
    }

    /// Structured payload written to stdout under `--format json`.
    ///
    /// Input failures use kind `input_format` (or `io`) and name the failing
    /// ranking where known; logical failures use kind `processing`.
    pub fn to_payload(&self) -> serde_json::Value {
        let message = self.message();
        let message = message.strip_prefix("error: ").unwrap_or(&message);
        match self {
            Self::InvalidRanking { side, error, .. } => ReconcileError::InputFormat {
                side: *side,
                error: error.clone(),
            }
            .to_payload(),
            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::FileTooLarge { .. }
            | Self::InvalidUtf8 { .. }
            | Self::StdinReadError { .. }
            | Self::StdinUsedTwice
            | Self::IoError { .. } => serde_json::json!({
                "error": { "kind": "io", "message": message }
            }),
            Self::CycleDetected { unplaced } => ReconcileError::CycleDetected {
                unplaced: unplaced.clone(),
            }
            .to_payload(),
            Self::UnknownElement { .. } | Self::InternalError { .. } => serde_json::json!({
                "error": { "kind": "processing", "message": message }
            }),
        }
    }

    /// Wraps a failed write to one of the standard streams.
    pub fn stream(target: &str, e: &std::io::Error) -> Self {
        Self::IoError {
            source: target.to_owned(),
            detail: e.to_string(),
        }
    }

    /// Converts an engine failure, attributing input errors to `source`.
    pub fn from_reconcile(err: ReconcileError, source: &str) -> Self {
        match err {
            ReconcileError::InputFormat { side, error } => Self::InvalidRanking {
                source: source.to_owned(),
                side,
                error,
            },
            ReconcileError::CycleDetected { unplaced } => Self::CycleDetected { unplaced },
            ReconcileError::Serialization(detail) => Self::InternalError { detail },
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for CliError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
