//! Pure tic-tac-toe game logic with time-travel history.
//!
//! # Architecture
//!
//! - **Rules**: [`rules::detect_winner`] finds the first completed line on a
//!   board, checked in a fixed order (rows, columns, diagonals).
//! - **History**: [`GameHistory`] stores one immutable [`Board`] snapshot per
//!   move, the step currently viewed, and derives turn order and status.
//! - **Invariants**: composable checks run after every history mutation in
//!   debug builds.
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{GameHistory, GameStatus, Player, Position};
//!
//! let mut history = GameHistory::new();
//! for pos in [Position::TopLeft, Position::TopCenter, Position::Center,
//!             Position::TopRight, Position::BottomRight] {
//!     history.apply_move(pos);
//! }
//! assert_eq!(history.current_status(), GameStatus::Winner(Player::X));
//!
//! // Look back at the board after the second move.
//! history.jump_to(2).unwrap();
//! assert_eq!(history.current_status(), GameStatus::NextPlayer(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod history;
pub mod invariants;
mod move_list;
mod position;
pub mod rules;
mod status;
mod turn;
mod types;

#[cfg(kani)]
mod kani_support;

pub use error::{HistoryError, IgnoreReason, MoveOutcome};
pub use history::{CellView, GameHistory, HistoryEntry};
pub use invariants::{HistoryInvariants, Invariant, InvariantSet, InvariantViolation};
pub use move_list::{MoveListEntry, SortOrder};
pub use position::{MovePosition, Position};
pub use rules::{WINNING_LINES, WinResult, detect_winner};
pub use status::{GamePhase, GameStatus};
pub use turn::side_to_move;
pub use types::{Board, Cell, Player};
