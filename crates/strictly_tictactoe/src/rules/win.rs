//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight lines of three, in the order they are checked.
///
/// Rows come first, then columns, then the two diagonals. When a
/// malformed board holds more than one complete line, the earliest
/// line in this table is the one reported.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line: who made it and which cells form it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinResult {
    player: Player,
    line: [Position; 3],
}

impl WinResult {
    /// Creates a win result.
    pub fn new(player: Player, line: [Position; 3]) -> Self {
        Self { player, line }
    }

    /// The player who owns the line.
    pub fn player(&self) -> Player {
        self.player
    }

    /// The three positions forming the line.
    pub fn line(&self) -> [Position; 3] {
        self.line
    }

    /// The line as raw board indices.
    pub fn indices(&self) -> [usize; 3] {
        self.line.map(Position::to_index)
    }

    /// Returns true if `pos` is part of the winning line.
    pub fn contains(&self, pos: Position) -> bool {
        self.line.contains(&pos)
    }
}

/// Finds the first complete line on the board.
///
/// Returns `None` when no row, column or diagonal is filled with a
/// single player's mark.
#[instrument]
pub fn detect_winner(board: &Board) -> Option<WinResult> {
    WINNING_LINES.iter().find_map(|&[a, b, c]| {
        match (board.get(a), board.get(b), board.get(c)) {
            (Cell::Occupied(p1), Cell::Occupied(p2), Cell::Occupied(p3))
                if p1 == p2 && p2 == p3 =>
            {
                Some(WinResult::new(p1, [a, b, c]))
            }
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(Position, Player)]) -> Board {
        marks
            .iter()
            .fold(Board::new(), |b, &(pos, p)| b.with_mark(pos, p))
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(detect_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
        ]);
        let win = detect_winner(&board).expect("top row is complete");
        assert_eq!(win.player(), Player::X);
        assert_eq!(win.indices(), [0, 1, 2]);
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[
            (Position::TopRight, Player::O),
            (Position::Center, Player::O),
            (Position::BottomLeft, Player::O),
        ]);
        let win = detect_winner(&board).expect("anti-diagonal is complete");
        assert_eq!(win.player(), Player::O);
        assert_eq!(win.indices(), [2, 4, 6]);
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::O),
            (Position::TopRight, Player::X),
        ]);
        assert_eq!(detect_winner(&board), None);
    }

    #[test]
    fn test_first_line_wins_on_malformed_board() {
        let board = board_with(&[
            (Position::TopCenter, Player::O),
            (Position::Center, Player::O),
            (Position::BottomCenter, Player::O),
            (Position::MiddleLeft, Player::X),
            (Position::MiddleRight, Player::X),
            (Position::TopLeft, Player::X),
            (Position::BottomLeft, Player::X),
        ]);
        // Column 0-3-6 (X) comes before column 1-4-7 (O).
        let win = detect_winner(&board).expect("two complete columns");
        assert_eq!(win.player(), Player::X);
        assert_eq!(win.indices(), [0, 3, 6]);
    }

    #[test]
    fn test_contains() {
        let win = WinResult::new(
            Player::X,
            [Position::TopLeft, Position::Center, Position::BottomRight],
        );
        assert!(win.contains(Position::Center));
        assert!(!win.contains(Position::TopRight));
    }
}
