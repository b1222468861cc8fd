use clap::Parser;
use rayon::prelude::*;
use sprintpulse::cli::{self, Cli, Commands};
use sprintpulse::engine::{normalize::normalize, reduce::reduce, score_sprint};
use sprintpulse::error::Result;
use sprintpulse::types::result::Tier;
use sprintpulse::types::snapshot::SprintWindow;
use sprintpulse::{config, ingest, report};
use std::path::Path;
use tracing::warn;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const HEALTHY: i32 = 0;
    pub const AT_RISK: i32 = 1;
    pub const CRITICAL: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn config_root(input: &Path) -> &Path {
    if input.is_dir() {
        input
    } else {
        input.parent().unwrap_or_else(|| Path::new("."))
    }
}

fn log_rescales(window: &SprintWindow) {
    for rescale in &window.rescales {
        warn!(
            sprint = %window.sprint_id,
            date = %rescale.date,
            factor = rescale.factor,
            "daily percentages rescaled onto a 100 sum"
        );
    }
}

fn tier_exit_code(tier: Tier) -> i32 {
    match tier {
        Tier::Healthy => exit_code::HEALTHY,
        Tier::AtRisk => exit_code::AT_RISK,
        Tier::Critical => exit_code::CRITICAL,
    }
}

fn tier_rank(tier: Tier) -> u8 {
    match tier {
        Tier::Healthy => 2,
        Tier::AtRisk => 1,
        Tier::Critical => 0,
    }
}

fn min_tier_rank(min_tier: cli::MinTier) -> u8 {
    match min_tier {
        cli::MinTier::Healthy => 2,
        cli::MinTier::AtRisk => 1,
        cli::MinTier::Critical => 0,
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Score(cmd) => {
            let scoring_config =
                config::load_config(config_root(&cmd.path), cmd.config.as_deref())?;
            let raw_sprints = ingest::load_sprints(&cmd.path)?;

            let windows = raw_sprints
                .iter()
                .map(normalize)
                .collect::<Result<Vec<_>>>()?;
            for window in &windows {
                log_rescales(window);
            }

            // Per-sprint scoring is pure and independent, so fan out.
            let results: Vec<_> = windows
                .par_iter()
                .map(|window| score_sprint(window, &scoring_config))
                .collect();
            let result = reduce(&results, &scoring_config)?;

            let format = match cmd.format {
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
            };
            println!("{}", report::render(&result, format)?);

            if tier_rank(result.tier) >= min_tier_rank(cmd.min_tier) {
                Ok(exit_code::HEALTHY)
            } else {
                Ok(tier_exit_code(result.tier))
            }
        }
        Commands::Validate(cmd) => {
            let raw_sprints = ingest::load_sprints(&cmd.path)?;
            let mut failures = 0;
            for raw in &raw_sprints {
                match normalize(raw) {
                    Ok(window) => {
                        log_rescales(&window);
                        println!(
                            "{}: ok ({} days, {} tasks, backlog change {:.1}%, {} rescaled)",
                            window.sprint_id,
                            window.snapshots.len(),
                            window.total_task_count,
                            window.backlog_change_pct,
                            window.rescales.len()
                        );
                    }
                    Err(e) => {
                        failures += 1;
                        println!("{}: invalid ({e})", raw.sprint_id);
                    }
                }
            }
            if failures == 0 {
                Ok(exit_code::HEALTHY)
            } else {
                Ok(exit_code::CRITICAL)
            }
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
