//! Single cell delta invariant: each snapshot adds exactly one mark.

use super::super::{GameHistory, HistoryEntry, Position, side_to_move};
use super::Invariant;
use crate::Cell;

/// Invariant: consecutive snapshots differ in exactly one cell.
///
/// That cell goes from empty to the mark of the player whose turn it
/// was, and the later snapshot records that cell's coordinates.
pub struct SingleCellDeltaInvariant;

fn is_single_move(step: usize, before: &HistoryEntry, after: &HistoryEntry) -> bool {
    let changed: Vec<Position> = Position::ALL
        .into_iter()
        .filter(|pos| before.board().get(*pos) != after.board().get(*pos))
        .collect();

    let [pos] = changed.as_slice() else {
        return false;
    };

    before.board().is_empty(*pos)
        && after.board().get(*pos) == Cell::Occupied(side_to_move(step))
        && *after.position() == Some(pos.move_position())
}

impl Invariant<GameHistory> for SingleCellDeltaInvariant {
    fn holds(history: &GameHistory) -> bool {
        history
            .entries()
            .windows(2)
            .enumerate()
            .all(|(step, pair)| is_single_move(step, &pair[0], &pair[1]))
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark for the player to move"
    }
}
