//! Tic-tac-toe board rendering.

use super::super::app::{App, Focus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use strictly_tictactoe::{Cell, CellView, Player, Position};

/// Renders the viewed snapshot with cursor and winning-line highlights.
pub fn render_board(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Board (step {})", app.history().step_number()))
        .border_style(focus_style(app.focus() == Focus::Board));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let view = app.history().board_view();
    let cursor = (app.focus() == Focus::Board).then_some(app.cursor());
    let board_area = center_rect(inner, 38, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    render_row(f, rows[0], &view, cursor, 0);
    render_separator(f, rows[1]);
    render_row(f, rows[2], &view, cursor, 3);
    render_separator(f, rows[3]);
    render_row(f, rows[4], &view, cursor, 6);
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn render_row(
    f: &mut Frame,
    area: Rect,
    view: &[CellView; 9],
    cursor: Option<Position>,
    start: usize,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (offset, col) in [0, 2, 4].into_iter().enumerate() {
        render_cell(f, cols[col], view, cursor, start + offset);
    }
    render_vertical_sep(f, cols[1]);
    render_vertical_sep(f, cols[3]);
}

fn render_cell(
    f: &mut Frame,
    area: Rect,
    view: &[CellView; 9],
    cursor: Option<Position>,
    index: usize,
) {
    let cell = view[index];
    let (text, mut style) = match cell.cell {
        Cell::Empty => (
            format!("{}", index + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    if cell.in_winning_line {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if cursor.is_some_and(|pos| pos.to_index() == index) {
        style = style.bg(Color::White).fg(Color::Black);
    }

    // Pad vertically so the mark sits in the middle of the 3-line cell.
    let paragraph = Paragraph::new(format!("\n{text}"))
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n│\n│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}
