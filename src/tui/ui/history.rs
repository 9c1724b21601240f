//! Move history panel.

use super::super::app::{App, Focus};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

/// Renders the navigable list of snapshots in the chosen order.
///
/// The viewed step is marked with an arrow, the last jumped-to step is
/// underlined, and the history cursor is reversed while the panel has
/// focus.
pub fn render_history(f: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus() == Focus::History;
    let viewed = app.history().step_number();

    let items: Vec<ListItem> = app
        .move_list()
        .into_iter()
        .map(|entry| {
            let marker = if entry.step == viewed { "▶ " } else { "  " };
            let mut style = Style::default();
            if entry.selected {
                style = style.fg(Color::Yellow).add_modifier(Modifier::UNDERLINED);
            }
            if focused && entry.step == app.highlighted_step() {
                style = style.add_modifier(Modifier::REVERSED);
            }
            ListItem::new(Line::from(vec![
                Span::raw(marker),
                Span::styled(entry.description, style),
            ]))
        })
        .collect();

    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("History")
            .border_style(border_style),
    );
    f.render_widget(list, area);
}
