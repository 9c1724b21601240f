//! Stateless UI rendering using ratatui.
//!
//! Every frame is a projection of [`App`]; nothing here mutates state.

mod board;
mod history;

use super::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use strictly_tictactoe::GameStatus;

pub use board::render_board;
pub use history::render_history;

/// Draws the main UI.
pub fn draw(f: &mut Frame, app: &App) {
    let help_height = if app.show_help() { 3 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(13),
            Constraint::Length(3),
            Constraint::Length(help_height),
        ])
        .split(f.area());

    let title = Paragraph::new("Strictly Timetravel - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board(f, body[0], app);
    render_history(f, body[1], app);

    let status = app.history().current_status();
    let status_color = match status {
        GameStatus::Winner(_) => Color::Green,
        GameStatus::Draw => Color::Magenta,
        GameStatus::NextPlayer(_) => Color::Yellow,
    };
    let status_text = match app.message() {
        Some(message) => format!("{status} ({message})"),
        None => status.to_string(),
    };
    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[2]);

    if app.show_help() {
        let help = Paragraph::new(format!(
            "1-9/Enter: Move | Tab: Board/History | S: {} | R: Restart | Q: Quit",
            app.sort_order().toggle_label()
        ))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(help, chunks[3]);
    }
}
