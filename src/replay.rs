//! Headless replay: play a list of cell indices and describe the result.

use std::fmt::Write;
use strictly_tictactoe::{GameHistory, HistoryError, MoveOutcome, SortOrder};
use tracing::{info, instrument, warn};

/// Plays `moves` from an empty board and returns the final history.
///
/// Moves the rules refuse are skipped and logged, just as a click on a
/// taken cell does nothing in the interactive client.
///
/// # Errors
///
/// Returns [`HistoryError::InvalidCell`] for an index outside 0-8.
#[instrument]
pub fn replay(moves: &[usize]) -> Result<GameHistory, HistoryError> {
    let mut history = GameHistory::new();
    for (n, &index) in moves.iter().enumerate() {
        if let MoveOutcome::Ignored(reason) = history.apply_index(index)? {
            warn!(move_number = n + 1, index, %reason, "Replay move ignored");
        }
    }
    info!(len = history.len(), status = %history.current_status(), "Replay finished");
    Ok(history)
}

/// Formats board, status and move list as plain text.
pub fn render_report(history: &GameHistory, order: SortOrder) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", history.current_board().display());
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", history.current_status());
    if let Some(win) = history.winner() {
        let _ = writeln!(out, "Winning line: {:?}", win.indices());
    }
    let _ = writeln!(out);
    for entry in history.move_list(order) {
        let marker = if entry.step == history.step_number() { '>' } else { ' ' };
        let _ = writeln!(out, "{marker} {:>2}. {}", entry.step, entry.description);
    }
    out
}
