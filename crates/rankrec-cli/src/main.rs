mod cli;
mod cmd;
mod error;
mod format;
mod io;
mod logging;

use std::io::Write as _;

use clap::Parser;

use cli::{Cli, Command};
pub use cli::{ComparatorArg, InputArgs, OutputFormat, PairPolicyArgs, PathOrStdin, PolicyArgs};
use error::CliError;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.quiet, cli.verbose);

    let code = match run(&cli) {
        Ok(()) => 0,
        Err(e) => {
            report(&e, cli.format);
            e.exit_code()
        }
    };
    std::process::exit(code);
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let format = cli.format;
    let max = cli.max_file_size;
    match &cli.command {
        Command::Reconcile { inputs, policy } => {
            cmd::reconcile::run(inputs, policy, format, cli.quiet, max)
        }
        Command::Contradictions { inputs, comparator } => {
            cmd::contradictions::run(inputs, *comparator, format, max)
        }
        Command::Merge { inputs, policy } => cmd::merge::run(inputs, policy, format, cli.quiet, max),
        Command::Relation {
            inputs,
            a,
            b,
            policy,
        } => cmd::relation::run(inputs, a, b, policy, format, max),
    }
}

/// Prints `e` to stderr, and as a JSON payload on stdout under `--format json`.
fn report(e: &CliError, output: OutputFormat) {
    tracing::debug!(exit_code = e.exit_code(), "command failed");
    writeln!(std::io::stderr(), "{}", e.message()).ok();
    if output == OutputFormat::Json {
        let mut out = std::io::stdout().lock();
        format::write_json(&mut out, &e.to_payload()).ok();
    }
}
