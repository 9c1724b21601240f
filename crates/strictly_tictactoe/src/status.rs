//! Game status as shown to the player.

use super::Player;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// What the status line says about the snapshot being viewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum GameStatus {
    /// A line has been completed.
    #[display("Winner {_0}")]
    Winner(Player),
    /// All nine cells are filled without a line.
    #[display("It is a draw!")]
    Draw,
    /// Play continues with this player.
    #[display("Next player: {_0}")]
    NextPlayer(Player),
}

impl GameStatus {
    /// The lifecycle phase this status belongs to.
    pub fn phase(self) -> GamePhase {
        match self {
            GameStatus::Winner(_) => GamePhase::Won,
            GameStatus::Draw => GamePhase::Draw,
            GameStatus::NextPlayer(_) => GamePhase::InProgress,
        }
    }
}

/// Lifecycle phase of a game.
///
/// `Won` and `Draw` refuse further moves. Jumping back in history can
/// return the view to `InProgress`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Moves are accepted.
    InProgress,
    /// Someone completed a line.
    Won,
    /// The board filled up without a line.
    Draw,
}

impl GamePhase {
    /// Returns true for `Won` and `Draw`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GamePhase::InProgress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        assert_eq!(GameStatus::Winner(Player::O).to_string(), "Winner O");
        assert_eq!(GameStatus::Draw.to_string(), "It is a draw!");
        assert_eq!(GameStatus::NextPlayer(Player::X).to_string(), "Next player: X");
    }

    #[test]
    fn test_terminal_phases() {
        assert!(GameStatus::Draw.phase().is_terminal());
        assert!(GameStatus::Winner(Player::X).phase().is_terminal());
        assert!(!GameStatus::NextPlayer(Player::O).phase().is_terminal());
    }
}
