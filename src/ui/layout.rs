//! Status bar

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Draw the key hints along the bottom row
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    if area.height == 0 {
        return;
    }

    let mut spans = vec![];

    // Delivery indicator
    let indicator = if app.controller.is_submitting() {
        Span::styled(" ◌ ", Style::default().fg(Color::Yellow))
    } else {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    };
    spans.push(indicator);

    let hints_key = if app.controller.selector().is_open {
        "help.dropdown"
    } else {
        "help.form"
    };
    spans.push(Span::styled(
        app.localizer.lookup(hints_key),
        Style::default().fg(Color::Black),
    ));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}
