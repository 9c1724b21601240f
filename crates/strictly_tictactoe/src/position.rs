//! Board positions and the 1-indexed coordinates recorded for each move.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the tic-tac-toe board (0-8, row-major).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopCenter => 1,
            Position::TopRight => 2,
            Position::MiddleLeft => 3,
            Position::Center => 4,
            Position::MiddleRight => 5,
            Position::BottomLeft => 6,
            Position::BottomCenter => 7,
            Position::BottomRight => 8,
        }
    }

    /// Creates position from board index.
    #[instrument]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// 1-indexed column (1-3).
    pub fn column(self) -> u8 {
        (self.to_index() % 3 + 1) as u8
    }

    /// 1-indexed row (1-3).
    pub fn row(self) -> u8 {
        (self.to_index() / 3 + 1) as u8
    }

    /// The coordinates recorded in history when a mark lands here.
    pub fn move_position(self) -> MovePosition {
        MovePosition {
            col: self.column(),
            row: self.row(),
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Column/row pair (both 1-indexed) of the move that produced a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display("({col},{row})")]
pub struct MovePosition {
    /// Column, 1 = left.
    pub col: u8,
    /// Row, 1 = top.
    pub row: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip_covers_board() {
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.to_index(), i);
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_coordinates_are_column_then_row() {
        assert_eq!(Position::TopLeft.move_position(), MovePosition { col: 1, row: 1 });
        assert_eq!(Position::TopRight.move_position(), MovePosition { col: 3, row: 1 });
        assert_eq!(Position::MiddleLeft.move_position(), MovePosition { col: 1, row: 2 });
        assert_eq!(Position::BottomCenter.move_position(), MovePosition { col: 2, row: 3 });
    }

    #[test]
    fn test_move_position_display() {
        assert_eq!(Position::MiddleRight.move_position().to_string(), "(3,2)");
    }
}
