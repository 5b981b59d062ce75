//! Dropdown overlay for single-choice fields

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render a bordered option list on top of whatever is underneath.
///
/// `current` marks the committed value, `highlighted` the keyboard cursor.
pub fn render_dropdown(
    frame: &mut Frame,
    area: Rect,
    options: &[String],
    highlighted: Option<usize>,
    current: Option<usize>,
) {
    if area.height == 0 {
        return;
    }

    frame.render_widget(Clear, area);

    let lines: Vec<Line> = options
        .iter()
        .enumerate()
        .map(|(idx, label)| {
            let marker = if current == Some(idx) { "● " } else { "  " };
            let style = if highlighted == Some(idx) {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(Span::styled(format!("{marker}{label}"), style))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
