//! Application state and core logic

use crate::config::TuiConfig;
use crate::contact::{ContactSubmissionController, Delivery, SubmitError};
use crate::locale::{Catalog, Localizer};
use crate::state::{
    AppState, ContactLayout, DropdownHit, FieldName, Form, Hit, SplashState, View,
};
use crate::transport::HttpTransport;
use anyhow::{Context, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Contact form and its submission lifecycle
    pub controller: ContactSubmissionController,
    /// Display strings
    pub localizer: Arc<dyn Localizer>,
    /// Whether the app should quit
    quit: bool,
    /// Splash screen animation state
    pub splash_state: Option<SplashState>,
    /// Terminal size for layout calculations (height, width)
    pub terminal_size: Option<(u16, u16)>,
    deliveries_tx: UnboundedSender<Delivery>,
    deliveries_rx: UnboundedReceiver<Delivery>,
}

impl App {
    /// Create a new App instance from the user configuration
    pub fn new() -> Result<Self> {
        let mut startup_errors = Vec::new();

        let config = match TuiConfig::load() {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("Failed to load config: {err:#}");
                startup_errors.push("error.config");
                TuiConfig::default()
            }
        };
        let settings = config.resolve();

        let mut catalog = Catalog::builtin(&settings.locale);
        if let Some(path) = &settings.locale_overrides {
            if let Err(err) = catalog.overlay_file(path) {
                tracing::warn!("Failed to load text overrides: {err:#}");
                startup_errors.push("error.locale");
            }
        }

        let transport = HttpTransport::new(settings.endpoint.clone(), settings.timeout)
            .with_context(|| catalog.lookup("error.transport"))?;
        tracing::info!(
            endpoint = transport.endpoint(),
            timeout_ms = settings.timeout.as_millis() as u64,
            locale = catalog.locale(),
            "starting contact desk"
        );
        let controller = ContactSubmissionController::new(Arc::new(transport), settings.timeout);

        let mut app = Self::with_parts(controller, Arc::new(catalog), !settings.skip_splash);
        for key in startup_errors {
            let message = app.localizer.lookup(key);
            app.push_error(message);
        }
        Ok(app)
    }

    /// Assemble an App from ready-made parts
    pub fn with_parts(
        controller: ContactSubmissionController,
        localizer: Arc<dyn Localizer>,
        show_splash: bool,
    ) -> Self {
        let (deliveries_tx, deliveries_rx) = mpsc::unbounded_channel();
        let mut state = AppState::default();
        let splash_state = if show_splash {
            state.current_view = View::Splash;
            Some(SplashState::new())
        } else {
            None
        };

        Self {
            state,
            controller,
            localizer,
            quit: false,
            splash_state,
            terminal_size: None,
            deliveries_tx,
            deliveries_rx,
        }
    }

    /// Update splash animation state
    /// Returns true if animation is complete and we should transition
    pub fn update_splash(&mut self, terminal_height: u16) -> bool {
        if let Some(ref mut splash) = self.splash_state {
            splash.update(terminal_height);
            if splash.is_complete() {
                self.finish_splash();
                return true;
            }
        }
        false
    }

    fn finish_splash(&mut self) {
        self.splash_state = None;
        self.state.current_view = View::Contact;
    }

    /// End the splash now (user pressed a key or clicked)
    fn skip_splash(&mut self) {
        if let Some(ref mut splash) = self.splash_state {
            splash.skip();
        }
        let height = self.terminal_size.map_or(0, |(height, _)| height);
        if !self.update_splash(height) {
            self.finish_splash();
        }
    }

    /// Check if in splash screen
    pub fn in_splash(&self) -> bool {
        matches!(self.state.current_view, View::Splash)
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Geometry of the contact page for the current terminal size
    pub fn contact_layout(&self) -> ContactLayout {
        // terminal_size is (height, width)
        let (height, width) = self.terminal_size.unwrap_or((24, 80));
        ContactLayout::compute(Rect::new(0, 0, width, height))
    }

    /// Start a submission on a background task.
    ///
    /// Validation failures and re-entrant attempts settle synchronously in
    /// the controller; only a valid ticket reaches the transport.
    pub fn submit(&mut self) {
        match self.controller.begin_submit() {
            Ok(ticket) => {
                tracing::debug!(request_id = %ticket.request_id(), "Delivering on background task");
                let tx = self.deliveries_tx.clone();
                tokio::spawn(async move {
                    let delivery = ticket.deliver().await;
                    if tx.send(delivery).is_err() {
                        tracing::debug!("Event loop gone, dropping delivery");
                    }
                });
            }
            Err(SubmitError::InFlight) => {}
            Err(err) => tracing::debug!("Submit rejected: {err}"),
        }
    }

    /// Apply every delivery that has arrived since the last frame
    pub fn poll_deliveries(&mut self) {
        while let Ok(delivery) = self.deliveries_rx.try_recv() {
            self.apply_delivery(delivery);
        }
    }

    fn apply_delivery(&mut self, delivery: Delivery) {
        if let Err(err) = self.controller.complete_submit(delivery) {
            tracing::debug!("Delivery settled with error: {err}");
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Global quit: Ctrl+C, even over a dialog or the splash
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return Ok(());
        }

        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        match self.state.current_view {
            View::Splash => self.skip_splash(),
            View::Contact => self.handle_contact_key(key),
        }
        Ok(())
    }

    fn handle_contact_key(&mut self, key: KeyEvent) {
        // Send shortcut works from anywhere and always re-validates
        if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.submit();
            return;
        }

        if self.controller.selector().is_open {
            self.handle_dropdown_key(key);
            return;
        }

        let form = self.controller.form();
        let on_submit_row = form.is_submit_row_active();
        let active = form.active_field_name();
        // Inputs are frozen while a submission is in flight
        let editable = !self.controller.is_submitting();

        match key.code {
            KeyCode::Tab => self.controller.form_mut().next_field(),
            KeyCode::BackTab => self.controller.form_mut().prev_field(),
            KeyCode::Enter if on_submit_row => {
                if self.submit_enabled() {
                    self.submit();
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') if active == Some(FieldName::Subject) => {
                self.controller.toggle_subject_selector();
            }
            KeyCode::Enter if active == Some(FieldName::Message) => {
                if editable {
                    self.edit_active_field(|field| field.push_char('\n'));
                }
            }
            KeyCode::Enter => self.controller.form_mut().next_field(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if editable {
                    self.edit_active_field(|field| field.push_char(c));
                }
            }
            KeyCode::Backspace => {
                if editable {
                    self.edit_active_field(|field| field.pop_char());
                }
            }
            _ => {}
        }
    }

    fn handle_dropdown_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.controller.highlight_prev_subject(),
            KeyCode::Down | KeyCode::Char('j') => self.controller.highlight_next_subject(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.controller.choose_highlighted_subject();
            }
            KeyCode::Esc => self.controller.close_subject_selector(),
            KeyCode::Tab => {
                self.controller.close_subject_selector();
                self.controller.form_mut().next_field();
            }
            KeyCode::BackTab => {
                self.controller.close_subject_selector();
                self.controller.form_mut().prev_field();
            }
            _ => {}
        }
    }

    fn edit_active_field(&mut self, edit: impl FnOnce(&mut crate::state::FormField)) {
        if let Some(field) = self.controller.form_mut().active_field_mut() {
            edit(field);
        }
    }

    /// Whether the submit button accepts activation
    pub fn submit_enabled(&self) -> bool {
        self.controller.is_submittable() && !self.controller.is_submitting()
    }

    /// Handle a mouse event
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        let MouseEventKind::Down(MouseButton::Left) = mouse.kind else {
            return Ok(());
        };

        if self.in_splash() {
            self.skip_splash();
            return Ok(());
        }

        if self.state.has_errors() {
            return Ok(());
        }

        let layout = self.contact_layout();
        let (col, row) = (mouse.column, mouse.row);

        if self.controller.selector().is_open {
            match layout.hit_dropdown(col, row) {
                DropdownHit::Option(index) => {
                    self.controller.choose_subject(index);
                    return Ok(());
                }
                DropdownHit::Frame => return Ok(()),
                DropdownHit::Outside => {
                    self.controller.close_subject_selector();
                    // A click on the subject control itself only closes
                    if layout.hit(col, row) == Some(Hit::Field(FieldName::Subject)) {
                        return Ok(());
                    }
                }
            }
        }

        match layout.hit(col, row) {
            Some(Hit::Field(name)) => {
                self.controller.form_mut().focus(name);
                if name == FieldName::Subject {
                    self.controller.toggle_subject_selector();
                }
            }
            Some(Hit::Submit) => {
                self.controller
                    .form_mut()
                    .set_active_field(crate::state::ContactForm::SUBMIT_ROW);
                if self.submit_enabled() {
                    self.submit();
                }
            }
            None => {}
        }
        Ok(())
    }

    /// Wait for the next delivery and apply it
    #[cfg(test)]
    pub async fn wait_for_delivery(&mut self) {
        if let Some(delivery) = self.deliveries_rx.recv().await {
            self.apply_delivery(delivery);
        }
    }
}
