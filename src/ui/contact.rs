//! Contact page rendering

use super::components::{render_button, render_dropdown};
use super::forms::{draw_field, FieldView};
use crate::app::App;
use crate::contact::BannerKind;
use crate::state::{ContactLayout, FieldName, SubjectCategory};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the whole contact page
pub fn draw(frame: &mut Frame, layout: &ContactLayout, app: &App) {
    draw_header(frame, layout.header, app);

    let intro = Paragraph::new(app.localizer.lookup("contact.intro"))
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true });
    frame.render_widget(intro, layout.intro);

    for name in FieldName::ALL {
        draw_form_field(frame, layout.field(name), app, name);
    }

    let form = app.controller.form();
    let button_label = if app.controller.is_submitting() {
        app.localizer.lookup("contact.submitting")
    } else {
        app.localizer.lookup("contact.submit")
    };
    if layout.submit.height > 0 {
        render_button(
            frame,
            layout.submit,
            &button_label,
            form.is_submit_row_active(),
            app.submit_enabled(),
        );
    }

    draw_banner(frame, layout.banner, app);

    // Overlay last so it covers the fields below the subject
    let selector = app.controller.selector();
    if selector.is_open {
        let options: Vec<String> = SubjectCategory::ALL
            .iter()
            .map(|category| app.localizer.lookup(&category.label_key()))
            .collect();
        let current = SubjectCategory::ALL
            .iter()
            .position(|category| category.key() == form.value(FieldName::Subject));
        render_dropdown(frame, layout.dropdown, &options, selector.highlighted, current);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", app.localizer.lookup("app.title")),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let heading = Paragraph::new(Line::from(Span::styled(
        app.localizer.lookup("contact.heading"),
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .block(block);
    frame.render_widget(heading, area);
}

fn draw_form_field(frame: &mut Frame, area: Rect, app: &App, name: FieldName) {
    let form = app.controller.form();
    let field = form.field(name);
    let is_active = form.active_field_name() == Some(name);
    let label = app.localizer.lookup(name.label_key());

    let (value, placeholder) = match name {
        FieldName::Subject => {
            let raw = field.as_text();
            let value = SubjectCategory::from_key(raw)
                .map(|category| app.localizer.lookup(&category.label_key()))
                .unwrap_or_else(|| raw.to_string());
            (value, app.localizer.lookup("contact.subject.placeholder"))
        }
        _ => (
            field.as_text().to_string(),
            if is_active {
                String::new()
            } else {
                app.localizer.lookup("contact.field.empty")
            },
        ),
    };

    let view = FieldView {
        label: &label,
        value: &value,
        placeholder: &placeholder,
        is_active,
        is_multiline: field.is_multiline(),
        show_cursor: is_active && field.accepts_typing() && !app.controller.is_submitting(),
    };
    draw_field(frame, area, &view);
}

fn draw_banner(frame: &mut Frame, area: Rect, app: &App) {
    let Some(banner) = app.controller.banner(app.localizer.as_ref()) else {
        return;
    };
    if area.height == 0 {
        return;
    }

    let color = match banner.kind {
        BannerKind::Info => Color::Cyan,
        BannerKind::Success => Color::Green,
        BannerKind::Error => Color::Red,
    };
    let paragraph = Paragraph::new(Span::styled(
        banner.text,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );
    frame.render_widget(paragraph, area);
}
