use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sprintpulse",
    version,
    about = "Sprint health scoring from daily task-state snapshots"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Score(ScoreCommand),
    Validate(ValidateCommand),
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum MinTier {
    Healthy,
    AtRisk,
    Critical,
}

#[derive(Args)]
pub struct ScoreCommand {
    /// Sprint snapshot file (.json) or a directory of them
    pub path: PathBuf,

    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,

    /// Scoring configuration file (defaults to sprintpulse.toml next to the input)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Lowest tier treated as success; tiers below it keep their exit code
    #[arg(long, value_enum, default_value = "healthy")]
    pub min_tier: MinTier,
}

#[derive(Args)]
pub struct ValidateCommand {
    /// Sprint snapshot file (.json) or a directory of them
    pub path: PathBuf,
}
