//! Error and outcome types for history operations.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Caller errors from [`GameHistory`](crate::GameHistory).
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum HistoryError {
    /// Requested step is not in the history.
    #[display("Step {step} is outside the history (0..{len})")]
    InvalidStep {
        /// The step that was requested.
        step: usize,
        /// Number of entries in the history.
        len: usize,
    },

    /// Cell index is not on the board.
    #[display("Cell index {index} is out of bounds (must be 0-8)")]
    InvalidCell {
        /// The index that was requested.
        index: usize,
    },

    /// A deserialized history breaks one or more history invariants.
    #[display("History is malformed: {details}")]
    Malformed {
        /// The violated invariants, joined.
        details: String,
    },
}

/// Result of asking for a move.
///
/// Rejected moves are not errors: clicking a taken cell or playing on
/// after the game ended simply has no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The mark was placed and a new snapshot appended.
    Applied,
    /// Nothing changed.
    Ignored(IgnoreReason),
}

impl MoveOutcome {
    /// Returns true if the move changed the history.
    pub fn is_applied(self) -> bool {
        matches!(self, MoveOutcome::Applied)
    }
}

/// Why a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// The viewed snapshot is already won or drawn.
    #[display("Game is already over")]
    GameOver,
    /// The target cell holds a mark.
    #[display("Cell is already occupied")]
    CellOccupied,
}
