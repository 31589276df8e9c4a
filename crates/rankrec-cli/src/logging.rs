//! Diagnostic logging setup.
//!
//! Engine and CLI events go through `tracing` to stderr, never stdout, so
//! JSON output stays machine-readable. `RUST_LOG` overrides the level chosen
//! from `--quiet` / `--verbose`.

use std::io::IsTerminal as _;

use tracing_subscriber::EnvFilter;

/// Default filter directive for the given verbosity flags.
pub fn default_directive(quiet: bool, verbose: bool) -> &'static str {
    if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Installs the global stderr subscriber.
///
/// A second call (tests, embedding) leaves the first subscriber in place.
pub fn init(quiet: bool, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(quiet, verbose)));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();

    if let Err(e) = installed {
        eprintln!("warning: logging not initialised: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_wins_over_default() {
        assert_eq!(default_directive(true, false), "error");
    }

    #[test]
    fn verbose_enables_debug() {
        assert_eq!(default_directive(false, true), "debug");
    }

    #[test]
    fn default_is_warn() {
        assert_eq!(default_directive(false, false), "warn");
    }

    #[test]
    fn directives_parse() {
        for (quiet, verbose) in [(true, false), (false, true), (false, false)] {
            assert!(EnvFilter::try_new(default_directive(quiet, verbose)).is_ok());
        }
    }
}
