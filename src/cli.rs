use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Vicinity synthetic KNN classifier.
#[derive(Parser)]
#[command(
    name = "vicinity",
    version,
    about = "k-nearest-neighbor classification on synthetic 2-D data"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Generate a training set and classify one random query.
    Classify(ClassifyArgs),
    /// Classify many random queries and report accuracy.
    Evaluate(EvaluateArgs),
}

/// Options shared by every subcommand.
#[derive(clap::Args)]
pub struct CommonArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,

    /// Override RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Override number of training points from config.
    #[arg(short, long)]
    pub n: Option<usize>,

    /// Override number of neighbors from config.
    #[arg(short, long)]
    pub k: Option<usize>,
}

/// Config path used when `--config` is not given. A missing file at this
/// path falls back to built-in defaults.
pub const DEFAULT_CONFIG: &str = "vicinity.toml";

/// Arguments for the `classify` subcommand.
#[derive(clap::Args)]
pub struct ClassifyArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Print the run as JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `evaluate` subcommand.
#[derive(clap::Args)]
pub struct EvaluateArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Override number of evaluation queries from config.
    #[arg(short, long)]
    pub queries: Option<usize>,

    /// Write the JSON report here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
