//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board
//! according to tic-tac-toe rules. Rules are separated from history
//! storage so that any snapshot can be judged on its own.

pub mod win;

#[cfg(kani)]
mod verification;

pub use win::{WINNING_LINES, WinResult, detect_winner};
