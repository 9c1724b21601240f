//! Strictly Timetravel - terminal tic-tac-toe with time travel.

use anyhow::{Context, Result};
use clap::Parser;
use strictly_timetravel::{AppConfig, Cli, Command, render_report, replay, run_tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = AppConfig::load_or_default(&cli.config)
        .context("Failed to load configuration")?
        .with_overrides(cli.log_file, cli.descending);

    init_tracing(&config)?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_tui(&config),
        Command::Replay { moves } => run_replay(&config, &moves),
    }
}

/// Sends logs to the configured file so they never draw over the UI.
fn init_tracing(config: &AppConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(log_file = %config.log_file().display(), "Tracing initialized");
    Ok(())
}

#[instrument(skip(config))]
fn run_replay(config: &AppConfig, moves: &[usize]) -> Result<()> {
    let history = replay(moves)?;
    print!("{}", render_report(&history, *config.sort_order()));
    Ok(())
}
