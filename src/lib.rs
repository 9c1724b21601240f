//! Strictly Timetravel - tic-tac-toe with a branchable move history.
//!
//! The game rules and history live in [`strictly_tictactoe`]. This crate
//! adds the terminal client around them.
//!
//! # Architecture
//!
//! - **Config**: TOML settings with command-line overrides
//! - **TUI**: ratatui client rendering the board, status and history list
//! - **Replay**: headless play of a list of cell indices
//!
//! # Example
//!
//! ```
//! use strictly_timetravel::{render_report, replay};
//! use strictly_tictactoe::SortOrder;
//!
//! let history = replay(&[0, 1, 4, 2, 8]).unwrap();
//! assert!(render_report(&history, SortOrder::Ascending).contains("Winner X"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod replay;
mod tui;

pub use cli::{Cli, Command};
pub use config::{AppConfig, ConfigError};
pub use replay::{render_report, replay};
pub use tui::{App, AppAction, Focus, draw, run_tui};
