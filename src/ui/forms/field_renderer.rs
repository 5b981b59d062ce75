//! Field rendering utilities for forms

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Everything needed to draw one boxed field
pub struct FieldView<'a> {
    pub label: &'a str,
    pub value: &'a str,
    /// Shown dimmed when `value` is empty
    pub placeholder: &'a str,
    pub is_active: bool,
    pub is_multiline: bool,
    /// Whether typing goes into this field right now
    pub show_cursor: bool,
}

/// Draw a labelled field box.
///
/// Text is hard-wrapped to the inner width and the box always shows the
/// last rows, so the newest text and the cursor stay visible.
pub fn draw_field(frame: &mut Frame, area: Rect, view: &FieldView) {
    if area.height == 0 {
        return;
    }

    let accent = if view.is_active {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let (display_value, value_style) = if view.value.is_empty() {
        (view.placeholder, Style::default().fg(Color::DarkGray))
    } else if view.is_active {
        (view.value, Style::default().fg(Color::Cyan))
    } else {
        (view.value, Style::default())
    };

    let block = Block::default()
        .title(format!(" {} ", view.label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));
    let inner = block.inner(area);

    let rows = visible_rows(
        display_value,
        inner.width as usize,
        inner.height as usize,
        view.show_cursor,
    );
    let last = rows.len().saturating_sub(1);
    let lines: Vec<Line> = rows
        .into_iter()
        .enumerate()
        .map(|(idx, row)| {
            let mut spans = vec![Span::styled(row, value_style)];
            if view.show_cursor && idx == last {
                spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
            }
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Split `text` into rows of at most `width` chars, breaking on newlines too
fn wrap_rows(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    for line in text.split('\n') {
        let chars: Vec<char> = line.chars().collect();
        if chars.is_empty() {
            rows.push(String::new());
            continue;
        }
        rows.extend(chars.chunks(width).map(|chunk| chunk.iter().collect::<String>()));
    }
    rows
}

/// The last `height` wrapped rows of `text`. With a cursor, a full last row
/// gets an empty row after it for the cursor cell.
fn visible_rows(text: &str, width: usize, height: usize, with_cursor: bool) -> Vec<String> {
    let mut rows = wrap_rows(text, width);
    if with_cursor && rows.last().is_some_and(|row| row.chars().count() >= width) {
        rows.push(String::new());
    }
    let start = rows.len().saturating_sub(height);
    rows.split_off(start)
}
