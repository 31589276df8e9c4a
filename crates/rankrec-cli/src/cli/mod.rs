//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use rankrec_core::{Comparator, CyclePolicy, Layering, ReconcileConfig, TieBreak};

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
///
/// Parsing `"-"` yields [`PathOrStdin::Stdin`]; anything else yields
/// [`PathOrStdin::Path`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl PathOrStdin {
    /// Label used in messages: the path, or `"-"` for stdin.
    pub fn label(&self) -> String {
        match self {
            Self::Stdin => "-".to_owned(),
            Self::Path(path) => path.display().to_string(),
        }
    }
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// Output format for CLI commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text for people (default).
    Human,
    /// JSON on stdout, including structured error payloads.
    Json,
}

/// Resolution of pairs the two rankings order in opposite directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TieBreakArg {
    /// The first ranking wins (default).
    First,
    /// The second ranking wins.
    Second,
    /// Leave contradicting pairs unconstrained.
    Ignore,
}

impl From<TieBreakArg> for TieBreak {
    fn from(arg: TieBreakArg) -> Self {
        match arg {
            TieBreakArg::First => TieBreak::FirstRanking,
            TieBreakArg::Second => TieBreak::SecondRanking,
            TieBreakArg::Ignore => TieBreak::Ignore,
        }
    }
}

/// Behaviour when layering runs into a cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CyclePolicyArg {
    /// Place the first remaining element and continue (default).
    BreakFirst,
    /// Fail with exit code 1.
    Strict,
}

impl From<CyclePolicyArg> for CyclePolicy {
    fn from(arg: CyclePolicyArg) -> Self {
        match arg {
            CyclePolicyArg::BreakFirst => CyclePolicy::BreakFirst,
            CyclePolicyArg::Strict => CyclePolicy::Strict,
        }
    }
}

/// How two elements of one ranking are compared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ComparatorArg {
    /// Cluster index only; cluster members are tied (default).
    Cluster,
    /// Cluster index, then order inside the cluster.
    Position,
}

impl From<ComparatorArg> for Comparator {
    fn from(arg: ComparatorArg) -> Self {
        match arg {
            ComparatorArg::Cluster => Comparator::Cluster,
            ComparatorArg::Position => Comparator::Position,
        }
    }
}

/// How the consistent ranking is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LayeringArg {
    /// Topological layers of the merged order (default).
    Topological,
    /// Clusters of equal dominance strength.
    Dominance,
}

impl From<LayeringArg> for Layering {
    fn from(arg: LayeringArg) -> Self {
        match arg {
            LayeringArg::Topological => Layering::Topological,
            LayeringArg::Dominance => Layering::Dominance,
        }
    }
}

/// The two ranking inputs shared by every subcommand.
#[derive(Args, Clone, Debug)]
pub struct InputArgs {
    /// First ranking (JSON array of clusters), or `-` for stdin.
    #[arg(value_name = "FIRST")]
    pub first: PathOrStdin,
    /// Second ranking (JSON array of clusters), or `-` for stdin (not both).
    #[arg(value_name = "SECOND")]
    pub second: PathOrStdin,
}

/// Merge and layering policies.
#[derive(Args, Clone, Debug)]
pub struct PolicyArgs {
    /// Resolution of pairs ordered in opposite directions.
    #[arg(long, value_enum, default_value = "first", env = "RANKREC_TIE_BREAK")]
    pub tie_break: TieBreakArg,
    /// Behaviour when the merged order is cyclic.
    #[arg(long, value_enum, default_value = "break-first")]
    pub cycle_policy: CyclePolicyArg,
    /// Element comparison inside each ranking.
    #[arg(long, value_enum, default_value = "cluster")]
    pub comparator: ComparatorArg,
    /// Construction of the consistent ranking.
    #[arg(long, value_enum, default_value = "topological")]
    pub layering: LayeringArg,
}

impl PolicyArgs {
    /// Builds the engine configuration from the parsed flags.
    pub fn to_config(&self) -> ReconcileConfig {
        ReconcileConfig {
            tie_break: self.tie_break.into(),
            cycle_policy: self.cycle_policy.into(),
            comparator: self.comparator.into(),
            layering: self.layering.into(),
        }
    }
}

/// Policies that affect a single pair: `relation` takes no layering flags.
#[derive(Args, Clone, Debug)]
pub struct PairPolicyArgs {
    /// Resolution of pairs ordered in opposite directions.
    #[arg(long, value_enum, default_value = "first", env = "RANKREC_TIE_BREAK")]
    pub tie_break: TieBreakArg,
    /// Element comparison inside each ranking.
    #[arg(long, value_enum, default_value = "cluster")]
    pub comparator: ComparatorArg,
}

impl PairPolicyArgs {
    /// Builds the engine configuration; layering policies keep their defaults.
    pub fn to_config(&self) -> ReconcileConfig {
        ReconcileConfig {
            tie_break: self.tie_break.into(),
            comparator: self.comparator.into(),
            ..ReconcileConfig::default()
        }
    }
}

/// All top-level subcommands exposed by the `rankrec` binary.
#[derive(Subcommand)]
pub enum Command {
    /// Report the contradiction core and a consistent merged ranking.
    Reconcile {
        #[command(flatten)]
        inputs: InputArgs,
        #[command(flatten)]
        policy: PolicyArgs,
    },

    /// List element pairs ordered in opposite directions by the two rankings.
    Contradictions {
        #[command(flatten)]
        inputs: InputArgs,
        /// Element comparison inside each ranking.
        #[arg(long, value_enum, default_value = "cluster")]
        comparator: ComparatorArg,
    },

    /// Print only the consistent merged ranking.
    Merge {
        #[command(flatten)]
        inputs: InputArgs,
        #[command(flatten)]
        policy: PolicyArgs,
    },

    /// Explain how element A relates to element B in each ranking and after merging.
    Relation {
        #[command(flatten)]
        inputs: InputArgs,
        /// Left element label.
        #[arg(value_name = "A")]
        a: String,
        /// Right element label.
        #[arg(value_name = "B")]
        b: String,
        #[command(flatten)]
        policy: PairPolicyArgs,
    },
}

/// Root CLI struct for the `rankrec` binary.
///
/// Global flags are marked `global = true` so that clap propagates them to
/// every subcommand.
#[derive(Parser)]
#[command(
    name = "rankrec",
    version,
    about = "Reconcile two expert rankings",
    long_about = "Reconciles two cluster rankings of the same elements.\n\
                  Finds the contradiction core (pairs ordered in opposite directions)\n\
                  and builds a merged ranking consistent with both inputs."
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Suppress all stderr output except errors (incompatible with `--verbose`).
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log pipeline stages to stderr (incompatible with `--quiet`).
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Maximum input file size in bytes.
    ///
    /// Can also be set via the `RANKREC_MAX_FILE_SIZE` environment variable.
    /// The CLI flag takes precedence over the environment variable.
    /// Default: 16777216 (16 MiB).
    #[arg(
        long,
        global = true,
        env = "RANKREC_MAX_FILE_SIZE",
        default_value = "16777216"
    )]
    pub max_file_size: u64,
}

#[cfg(test)]
mod tests;
