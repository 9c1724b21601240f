//! Move history with time travel.
//!
//! [`GameHistory`] keeps one board snapshot per move, starting from the
//! empty board, plus the step currently being viewed. Jumping to an
//! earlier step only moves the view. A new move made from an earlier
//! step discards every later snapshot before appending its own.

use super::error::{HistoryError, IgnoreReason, MoveOutcome};
use super::invariants::{HistoryInvariants, InvariantSet, assert_invariants};
use super::move_list::{MoveListEntry, SortOrder};
use super::position::{MovePosition, Position};
use super::rules::{self, WinResult};
use super::status::{GamePhase, GameStatus};
use super::turn::side_to_move;
use super::types::{Board, Cell, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// One immutable snapshot: the board and the move that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Board after the move.
    board: Board,
    /// Where the move was played; `None` for the starting board.
    position: Option<MovePosition>,
}

impl HistoryEntry {
    /// The empty starting board.
    pub fn start() -> Self {
        Self {
            board: Board::new(),
            position: None,
        }
    }

    pub(crate) fn after_move(board: Board, position: MovePosition) -> Self {
        Self {
            board,
            position: Some(position),
        }
    }
}

/// A board cell as presented to the player.
///
/// The winning-line flag is derived from the viewed snapshot on every
/// call and is never stored in history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellView {
    /// Contents of the cell.
    pub cell: Cell,
    /// True if the cell belongs to the completed line.
    pub in_winning_line: bool,
}

/// Authoritative game state: snapshots, viewed step and last selection.
///
/// Deserialization goes through the history invariants, so a loaded
/// history is as sound as one built move by move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawHistory")]
pub struct GameHistory {
    entries: Vec<HistoryEntry>,
    step_number: usize,
    selected_step: Option<usize>,
}

/// Unchecked wire form of [`GameHistory`].
#[derive(Deserialize)]
struct RawHistory {
    entries: Vec<HistoryEntry>,
    step_number: usize,
    selected_step: Option<usize>,
}

impl TryFrom<RawHistory> for GameHistory {
    type Error = HistoryError;

    fn try_from(raw: RawHistory) -> Result<Self, Self::Error> {
        let history = Self {
            entries: raw.entries,
            step_number: raw.step_number,
            selected_step: raw.selected_step,
        };

        if let Err(violations) = HistoryInvariants::check_all(&history) {
            let details = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(HistoryError::Malformed { details });
        }

        match history.selected_step {
            Some(step) if step >= history.len() => Err(HistoryError::InvalidStep {
                step,
                len: history.len(),
            }),
            _ => Ok(history),
        }
    }
}

impl GameHistory {
    /// Creates a history holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryEntry::start()],
            step_number: 0,
            selected_step: None,
        }
    }

    /// Builds a history from raw parts without checking invariants.
    #[cfg(test)]
    pub(crate) fn from_parts(entries: Vec<HistoryEntry>, step_number: usize) -> Self {
        Self {
            entries,
            step_number,
            selected_step: None,
        }
    }

    /// All snapshots, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of snapshots (moves played plus the starting board).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True only for a malformed history; the starting board is never removed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the snapshot being viewed.
    pub fn step_number(&self) -> usize {
        self.step_number
    }

    /// The step last chosen with [`GameHistory::jump_to`], if any.
    pub fn selected_step(&self) -> Option<usize> {
        self.selected_step
    }

    /// The snapshot being viewed.
    pub fn current(&self) -> &HistoryEntry {
        &self.entries[self.step_number]
    }

    /// Board of the snapshot being viewed.
    pub fn current_board(&self) -> &Board {
        self.current().board()
    }

    /// Player to move from the viewed snapshot.
    pub fn side_to_move(&self) -> Player {
        side_to_move(self.step_number)
    }

    /// Completed line on the viewed snapshot, if any.
    pub fn winner(&self) -> Option<WinResult> {
        rules::detect_winner(self.current_board())
    }

    /// Places the side to move's mark at `pos`.
    ///
    /// Ignored without any state change if the viewed snapshot is won
    /// or full, or if the cell is taken. Otherwise later snapshots are
    /// discarded, the new one is appended and becomes the viewed step.
    #[instrument(skip(self), fields(step = self.step_number, player = %self.side_to_move()))]
    pub fn apply_move(&mut self, pos: Position) -> MoveOutcome {
        let board = *self.current_board();

        if self.winner().is_some() || board.is_full() {
            debug!(position = %pos, "Move ignored, game is over");
            return MoveOutcome::Ignored(IgnoreReason::GameOver);
        }

        if !board.is_empty(pos) {
            debug!(position = %pos, "Move ignored, cell is occupied");
            return MoveOutcome::Ignored(IgnoreReason::CellOccupied);
        }

        let player = self.side_to_move();
        let discarded = self.entries.len() - (self.step_number + 1);
        self.entries.truncate(self.step_number + 1);
        self.entries.push(HistoryEntry::after_move(
            board.with_mark(pos, player),
            pos.move_position(),
        ));
        self.step_number = self.entries.len() - 1;
        self.selected_step = None;

        info!(
            position = %pos,
            coords = %pos.move_position(),
            discarded,
            "Move applied"
        );
        assert_invariants(self);

        MoveOutcome::Applied
    }

    /// Like [`GameHistory::apply_move`] but takes a raw board index.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::InvalidCell`] if `index` is not 0-8.
    #[instrument(skip(self))]
    pub fn apply_index(&mut self, index: usize) -> Result<MoveOutcome, HistoryError> {
        let pos = Position::from_index(index).ok_or(HistoryError::InvalidCell { index })?;
        Ok(self.apply_move(pos))
    }

    /// Views the snapshot at `step` without touching history contents.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::InvalidStep`] if `step` is not a valid
    /// index; the state is left unchanged.
    #[instrument(skip(self), fields(len = self.entries.len()))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), HistoryError> {
        if step >= self.entries.len() {
            return Err(HistoryError::InvalidStep {
                step,
                len: self.entries.len(),
            });
        }

        self.step_number = step;
        self.selected_step = Some(step);
        debug!(next = %self.side_to_move(), "Jumped to step");
        assert_invariants(self);
        Ok(())
    }

    /// Status of the viewed snapshot.
    pub fn current_status(&self) -> GameStatus {
        if let Some(win) = self.winner() {
            GameStatus::Winner(win.player())
        } else if self.step_number >= 9 {
            GameStatus::Draw
        } else {
            GameStatus::NextPlayer(self.side_to_move())
        }
    }

    /// Lifecycle phase of the viewed snapshot.
    pub fn phase(&self) -> GamePhase {
        self.current_status().phase()
    }

    /// Navigation entries for every snapshot in the requested order.
    ///
    /// The order only affects the returned list; history itself is
    /// always kept oldest first.
    pub fn move_list(&self, order: SortOrder) -> Vec<MoveListEntry> {
        let mut list: Vec<MoveListEntry> = self
            .entries
            .iter()
            .enumerate()
            .map(|(step, entry)| {
                MoveListEntry::new(step, *entry.position(), self.selected_step == Some(step))
            })
            .collect();

        if order == SortOrder::Descending {
            list.reverse();
        }
        list
    }

    /// Per-cell view of the viewed snapshot with the winning line marked.
    pub fn board_view(&self) -> [CellView; 9] {
        let board = self.current_board();
        let win = self.winner();
        Position::ALL.map(|pos| CellView {
            cell: board.get(pos),
            in_winning_line: win.is_some_and(|w| w.contains(pos)),
        })
    }

    /// Throws away every move and returns to the empty board.
    #[instrument(skip(self), fields(len = self.entries.len()))]
    pub fn restart(&mut self) {
        *self = Self::new();
        info!("History reset");
    }
}

impl Default for GameHistory {
    fn default() -> Self {
        Self::new()
    }
}
