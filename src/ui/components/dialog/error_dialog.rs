//! Error dialog component

use super::base::{render_dialog, DialogConfig};
use crate::locale::Localizer;
use ratatui::{style::Color, Frame};

/// Render an error dialog overlay centered on the screen
pub fn render_error_dialog(frame: &mut Frame, error_message: &str, localizer: &dyn Localizer) {
    let title = localizer.lookup("dialog.error.title");
    let hint = localizer.lookup("dialog.error.dismiss");

    render_dialog(
        frame,
        DialogConfig {
            title: &title,
            title_color: Color::Red,
            border_color: Color::Red,
            message: error_message,
            hint: Some(&hint),
            max_width: 60,
        },
    );
}
