//! Empty root invariant: history always starts from the empty board.

use super::super::{Board, GameHistory};
use super::Invariant;

/// Invariant: entry 0 is the empty board with no move position.
pub struct EmptyRootInvariant;

impl Invariant<GameHistory> for EmptyRootInvariant {
    fn holds(history: &GameHistory) -> bool {
        history
            .entries()
            .first()
            .is_some_and(|root| *root.board() == Board::new() && root.position().is_none())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HistoryEntry;

    #[test]
    fn test_new_history_holds() {
        assert!(EmptyRootInvariant::holds(&GameHistory::new()));
    }

    #[test]
    fn test_missing_root_violates() {
        let history = GameHistory::from_parts(Vec::new(), 0);
        assert!(!EmptyRootInvariant::holds(&history));
    }

    #[test]
    fn test_root_with_position_violates() {
        let mut moved = GameHistory::new();
        moved.apply_move(crate::Position::Center);
        let second = moved.entries()[1];

        let history = GameHistory::from_parts(vec![second, HistoryEntry::start()], 0);
        assert!(!EmptyRootInvariant::holds(&history));
    }
}
