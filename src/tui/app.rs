//! Application state and key handling.

use super::input::{digit_position, move_cursor};
use crate::AppConfig;
use crossterm::event::KeyCode;
use strictly_tictactoe::{GameHistory, MoveListEntry, MoveOutcome, Position, SortOrder};
use tracing::{debug, instrument, warn};

/// Which panel receives arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 board.
    #[default]
    Board,
    /// The move history list.
    History,
}

impl Focus {
    /// The other panel.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::History,
            Focus::History => Focus::Board,
        }
    }
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Redraw and keep reading keys.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Main application state.
///
/// The game itself lives in [`GameHistory`]; everything else here is
/// presentation state that never feeds back into the history.
#[derive(Debug, Clone)]
pub struct App {
    history: GameHistory,
    cursor: Position,
    sort_order: SortOrder,
    focus: Focus,
    highlighted_step: usize,
    show_help: bool,
    message: Option<String>,
}

impl App {
    /// Creates a new application.
    pub fn new(config: &AppConfig) -> Self {
        Self {
            history: GameHistory::new(),
            cursor: Position::Center,
            sort_order: *config.sort_order(),
            focus: Focus::Board,
            highlighted_step: 0,
            show_help: *config.show_help(),
            message: None,
        }
    }

    /// The game history.
    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Current order of the history list.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Panel with keyboard focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Step under the history cursor.
    pub fn highlighted_step(&self) -> usize {
        self.highlighted_step
    }

    /// Whether the help bar is drawn.
    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// Feedback from the last key, e.g. why a move was refused.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// History rows in display order.
    pub fn move_list(&self) -> Vec<MoveListEntry> {
        self.history.move_list(self.sort_order)
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) -> AppAction {
        self.message = None;

        if let Some(pos) = digit_position(key) {
            self.cursor = pos;
            self.play(pos);
            return AppAction::Continue;
        }

        match key {
            KeyCode::Char('q') | KeyCode::Esc => return AppAction::Quit,
            KeyCode::Char('s') => {
                self.sort_order = self.sort_order.toggle();
                debug!(order = ?self.sort_order, "Sort order toggled");
            }
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char('?') => self.show_help = !self.show_help,
            KeyCode::Tab => self.focus = self.focus.toggle(),
            _ => match self.focus {
                Focus::Board => self.handle_board_key(key),
                Focus::History => self.handle_history_key(key),
            },
        }

        AppAction::Continue
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            _ => self.cursor = move_cursor(self.cursor, key),
        }
    }

    fn handle_history_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up => self.move_highlight(-1),
            KeyCode::Down => self.move_highlight(1),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Err(e) = self.history.jump_to(self.highlighted_step) {
                    warn!(error = %e, "Jump refused");
                    self.message = Some(e.to_string());
                }
            }
            _ => {}
        }
    }

    /// Moves the history cursor one row up or down the displayed list.
    fn move_highlight(&mut self, delta: isize) {
        let rows = self.move_list();
        let current = rows
            .iter()
            .position(|row| row.step == self.highlighted_step)
            .unwrap_or(0);
        let next = current
            .saturating_add_signed(delta)
            .min(rows.len().saturating_sub(1));
        if let Some(row) = rows.get(next) {
            self.highlighted_step = row.step;
        }
    }

    fn play(&mut self, pos: Position) {
        match self.history.apply_move(pos) {
            MoveOutcome::Applied => {
                self.highlighted_step = self.history.step_number();
            }
            MoveOutcome::Ignored(reason) => {
                self.message = Some(reason.to_string());
            }
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.history.restart();
        self.highlighted_step = 0;
        self.cursor = Position::Center;
        self.focus = Focus::Board;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_tictactoe::{Cell, GameStatus, Player};

    fn app() -> App {
        App::new(&AppConfig::default())
    }

    #[test]
    fn test_enter_plays_at_cursor() {
        let mut app = app();
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Enter);

        assert_eq!(
            app.history().current_board().get(Position::TopCenter),
            Cell::Occupied(Player::X)
        );
        assert_eq!(app.highlighted_step(), 1);
    }

    #[test]
    fn test_refused_move_sets_message() {
        let mut app = app();
        app.handle_key(KeyCode::Char('5'));
        app.handle_key(KeyCode::Char('5'));

        assert_eq!(app.history().len(), 2);
        assert_eq!(app.message(), Some("Cell is already occupied"));
    }

    #[test]
    fn test_history_navigation_jumps() {
        let mut app = app();
        for key in ['1', '5', '9'] {
            app.handle_key(KeyCode::Char(key));
        }
        app.handle_key(KeyCode::Tab);
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Enter);

        assert_eq!(app.history().step_number(), 1);
        assert_eq!(app.history().selected_step(), Some(1));
        assert_eq!(app.history().len(), 4);
        assert_eq!(app.history().current_status(), GameStatus::NextPlayer(Player::O));
    }

    #[test]
    fn test_arrows_follow_descending_order() {
        let mut app = app();
        for key in ['1', '5'] {
            app.handle_key(KeyCode::Char(key));
        }
        app.handle_key(KeyCode::Char('s'));
        app.handle_key(KeyCode::Tab);

        // Newest first: step 2 is the top row, so Down goes back in time.
        app.handle_key(KeyCode::Down);
        assert_eq!(app.highlighted_step(), 1);
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Up);
        assert_eq!(app.highlighted_step(), 2);
    }

    #[test]
    fn test_sort_toggle_leaves_history_alone() {
        let mut app = app();
        app.handle_key(KeyCode::Char('1'));
        let before = app.history().clone();

        app.handle_key(KeyCode::Char('s'));
        assert_eq!(app.sort_order(), SortOrder::Descending);
        assert_eq!(app.history(), &before);
        assert_eq!(app.move_list()[0].step, 1);
    }

    #[test]
    fn test_restart_and_quit() {
        let mut app = app();
        app.handle_key(KeyCode::Char('1'));
        assert_eq!(app.handle_key(KeyCode::Char('r')), AppAction::Continue);
        assert_eq!(app.history().len(), 1);
        assert_eq!(app.handle_key(KeyCode::Char('q')), AppAction::Quit);
    }
}
