//! UI module for rendering the TUI

mod components;
mod contact;
mod forms;
mod layout;
mod splash;

use crate::app::App;
use crate::state::View;
use components::render_error_dialog;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    match app.state.current_view {
        View::Splash => {
            if let Some(splash_state) = &app.splash_state {
                let hint = app.localizer.lookup("splash.hint");
                splash::draw(frame, area, splash_state, &hint);
            }
        }
        View::Contact => {
            let page = crate::state::ContactLayout::compute(area);
            contact::draw(frame, &page, app);
            layout::draw_status_bar(frame, page.status_bar, app);
        }
    }

    // Error dialog overlay (modal, rendered last)
    if let Some(error) = app.state.current_error() {
        render_error_dialog(frame, error, app.localizer.as_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::{ContactSubmissionController, TransportError};
    use crate::locale::{Catalog, Localizer};
    use crate::state::FieldName;
    use crate::transport::MockSubmissionTransport;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;
    use std::time::Duration;

    fn app_with(transport: MockSubmissionTransport, locale: &str) -> App {
        let controller =
            ContactSubmissionController::new(Arc::new(transport), Duration::from_secs(5));
        App::with_parts(controller, Arc::new(Catalog::builtin(locale)), false)
    }

    fn render(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_contact_page_shows_labels() {
        let app = app_with(MockSubmissionTransport::new(), "en");
        let screen = render(&app, 100, 40);
        assert!(screen.contains("Name"));
        assert!(screen.contains("Email"));
        assert!(screen.contains("Choose a subject"));
        assert!(screen.contains("Send message"));
        assert!(screen.contains("Ctrl+S send"));
    }

    #[test]
    fn test_french_labels() {
        let app = app_with(MockSubmissionTransport::new(), "fr");
        let screen = render(&app, 100, 40);
        assert!(screen.contains(&Catalog::builtin("fr").lookup("contact.submit")));
    }

    #[test]
    fn test_open_dropdown_lists_subjects() {
        let mut app = app_with(MockSubmissionTransport::new(), "en");
        app.controller.toggle_subject_selector();
        let screen = render(&app, 100, 40);
        assert!(screen.contains("General enquiry"));
        assert!(screen.contains("Wholesale & partnerships"));
        assert!(screen.contains("↑↓ choose"));
    }

    #[test]
    fn test_selected_subject_shows_label() {
        let mut app = app_with(MockSubmissionTransport::new(), "en");
        app.controller.update_field(FieldName::Subject, "press");
        let screen = render(&app, 100, 40);
        assert!(screen.contains("Press"));
        assert!(!screen.contains("Choose a subject"));
    }

    #[test]
    fn test_error_banner_rendered() {
        let mut transport = MockSubmissionTransport::new();
        transport
            .expect_send()
            .returning(|_, _| Err(TransportError::Rejected { status: 503 }));
        let mut app = app_with(transport, "en");
        for name in FieldName::ALL {
            app.controller.update_field(name, "x");
        }
        tokio_test::block_on(app.controller.submit()).unwrap_err();

        let screen = render(&app, 100, 40);
        assert!(screen.contains("We could not send your message."));
    }

    #[test]
    fn test_long_message_keeps_newest_lines_visible() {
        let mut app = app_with(MockSubmissionTransport::new(), "en");
        let message = (1..=9)
            .map(|n| format!("line{n}"))
            .collect::<Vec<_>>()
            .join("\n");
        app.controller.update_field(FieldName::Message, message);
        app.controller.form_mut().focus(FieldName::Message);

        let screen = render(&app, 100, 40);
        assert!(screen.contains("line9▌"));
        assert!(screen.contains("line6"));
        assert!(!screen.contains("line1"));
    }

    #[test]
    fn test_error_dialog_overlay() {
        let mut app = app_with(MockSubmissionTransport::new(), "en");
        app.push_error("Could not read the configuration file");
        let screen = render(&app, 100, 40);
        assert!(screen.contains("Error"));
        assert!(screen.contains("Press Enter or Esc to dismiss"));
    }

    #[test]
    fn test_splash_renders_hint() {
        let controller = ContactSubmissionController::new(
            Arc::new(MockSubmissionTransport::new()),
            Duration::from_secs(5),
        );
        let app = App::with_parts(controller, Arc::new(Catalog::english()), true);
        let screen = render(&app, 80, 24);
        assert!(screen.contains("Press any key to skip"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut app = app_with(MockSubmissionTransport::new(), "en");
        app.controller.toggle_subject_selector();
        app.push_error("boom");
        render(&app, 10, 4);
    }
}
