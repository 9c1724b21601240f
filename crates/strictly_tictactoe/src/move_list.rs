//! History navigation entries and their display order.

use super::position::MovePosition;
use serde::{Deserialize, Serialize};

/// One row of the history navigation list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveListEntry {
    /// Index into history this row jumps to.
    pub step: usize,
    /// Button text, e.g. `Go to move #2 (3,1)`.
    pub description: String,
    /// Coordinates of the move, `None` for the game start.
    pub position: Option<MovePosition>,
    /// True if this step was the last one jumped to.
    pub selected: bool,
}

impl MoveListEntry {
    /// Builds the row for `step`.
    pub fn new(step: usize, position: Option<MovePosition>, selected: bool) -> Self {
        let description = match (step, position) {
            (0, _) | (_, None) => "Go to game start".to_string(),
            (n, Some(pos)) => format!("Go to move #{n} {pos}"),
        };
        Self {
            step,
            description,
            position,
            selected,
        }
    }

    /// Coordinates as text, empty for the game start.
    pub fn position_label(&self) -> String {
        self.position.map(|p| p.to_string()).unwrap_or_default()
    }
}

/// Display order of the history list. Pure presentation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest move first.
    #[default]
    Ascending,
    /// Newest move first.
    Descending,
}

impl SortOrder {
    /// The other order.
    pub fn toggle(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    /// Label for the toggle control, naming the order it switches to.
    pub fn toggle_label(self) -> String {
        let target = match self.toggle() {
            SortOrder::Ascending => "Ascending",
            SortOrder::Descending => "Descending",
        };
        format!("Sort history by: {target}")
    }
}
