//! Step bounds invariant: the viewed step always exists.

use super::super::GameHistory;
use super::Invariant;

/// Invariant: `step_number < len`.
pub struct StepInBoundsInvariant;

impl Invariant<GameHistory> for StepInBoundsInvariant {
    fn holds(history: &GameHistory) -> bool {
        history.step_number() < history.len()
    }

    fn description() -> &'static str {
        "Viewed step is inside the history"
    }
}
