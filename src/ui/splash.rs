//! Splash screen rendering with the atelier wordmark

use crate::state::SplashState;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const WORDMARK: [&str; 4] = [
    "▄▀█ ▀█▀ █▀▀ █   █ █▀▀ █▀█",
    "█▀█  █  ██▄ █▄▄ █ ██▄ █▀▄",
    "",
    "  P A R F U M E U R S  ",
];

fn build_wordmark() -> Vec<Line<'static>> {
    let mark = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let tagline = Style::default().fg(Color::Gray);
    WORDMARK
        .iter()
        .enumerate()
        .map(|(idx, text)| {
            let style = if idx < 2 { mark } else { tagline };
            Line::from(Span::styled(*text, style)).centered()
        })
        .collect()
}

/// Draw the splash screen
pub fn draw(frame: &mut Frame, area: Rect, splash_state: &SplashState, hint: &str) {
    let lines = build_wordmark();

    let logo_height = lines.len() as u16;
    let logo_width = WORDMARK
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0) as u16;

    // Centered, then lifted by the scroll offset (may go above the screen)
    let base_y = area.y as i32 + (area.height.saturating_sub(logo_height)) as i32 / 2;
    let y_pos = base_y - splash_state.scroll_offset as i32;
    let x = area.x + (area.width.saturating_sub(logo_width)) / 2;

    let lines_off_top = if y_pos < 0 { (-y_pos) as usize } else { 0 };
    if lines_off_top >= lines.len() {
        return;
    }

    let visible_lines: Vec<Line> = lines.into_iter().skip(lines_off_top).collect();
    let visible_height = visible_lines.len() as u16;
    let render_y = if y_pos < 0 { area.y } else { y_pos as u16 };

    let logo_area = Rect {
        x,
        y: render_y,
        width: logo_width.min(area.width),
        height: visible_height.min(area.height.saturating_sub(render_y - area.y)),
    };
    frame.render_widget(Paragraph::new(visible_lines), logo_area);

    // Hint only while the wordmark is still
    if splash_state.scroll_offset < 1.0 && area.height >= 2 {
        let hint_width = (hint.chars().count() as u16).min(area.width);
        let hint_area = Rect {
            x: area.x + (area.width.saturating_sub(hint_width)) / 2,
            y: area.y + area.height - 2,
            width: hint_width,
            height: 1,
        };
        let hint_line = Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray)));
        frame.render_widget(Paragraph::new(hint_line), hint_area);
    }
}
