//! Command-line interface for strictly_timetravel.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Timetravel - tic-tac-toe with a branchable move history
#[derive(Parser, Debug)]
#[command(name = "strictly_timetravel")]
#[command(about = "Tic-tac-toe with time travel through the move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "strictly_timetravel.toml")]
    pub config: PathBuf,

    /// Write logs to this file instead of the configured one
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// List history newest first
    #[arg(long)]
    pub descending: bool,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Apply cell indices (0-8) without a UI and print the result
    Replay {
        /// Cell indices in the order they are played
        #[arg(required = true)]
        moves: Vec<usize>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_play() {
        let cli = Cli::parse_from(["strictly_timetravel"]);
        assert_eq!(cli.command, None);
        assert_eq!(cli.config, PathBuf::from("strictly_timetravel.toml"));
        assert!(!cli.descending);
    }

    #[test]
    fn test_replay_moves() {
        let cli = Cli::parse_from(["strictly_timetravel", "--descending", "replay", "0", "4", "8"]);
        assert!(cli.descending);
        assert_eq!(cli.command, Some(Command::Replay { moves: vec![0, 4, 8] }));
    }
}
