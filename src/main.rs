//! Atelier TUI - terminal contact desk for the Atelier perfume house
//!
//! A Ratatui-based TUI for writing to the atelier: fill in the contact
//! form, pick a subject and send it to the contact endpoint.

mod app;
mod config;
mod contact;
mod locale;
mod state;
mod transport;
mod ui;

use anyhow::Result;
use app::App;
use config::TuiConfig;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging to a file; stderr would draw over the alternate screen
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "atelier_tui=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(log_writer()),
        )
        .init();

    // Create app before touching the terminal so setup errors print plainly
    let mut app = App::new()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

/// Writer for the log file, or a sink when no file can be opened
fn log_writer() -> BoxMakeWriter {
    let Some(path) = TuiConfig::log_path() else {
        return BoxMakeWriter::new(io::sink);
    };
    match TuiConfig::open_log(&path) {
        Ok(file) => BoxMakeWriter::new(Mutex::new(file)),
        Err(err) => {
            eprintln!("Logging disabled: {err:#}");
            BoxMakeWriter::new(io::sink)
        }
    }
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        let term_size = terminal.size()?;
        let terminal_height = term_size.height;
        let terminal_width = term_size.width;
        app.terminal_size = Some((terminal_height, terminal_width));

        let in_splash = app.in_splash();
        if in_splash {
            app.update_splash(terminal_height);
        }

        // Settle any submission that finished since the last frame
        app.poll_deliveries();

        terminal.draw(|frame| ui::draw(frame, app))?;

        // Faster polling during animation or while a message is in flight
        let poll_duration = if in_splash || app.controller.is_submitting() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        };

        if event::poll(poll_duration)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key)?;
                }
                Event::Mouse(mouse) => {
                    app.handle_mouse(mouse)?;
                }
                Event::Resize(_width, _height) => {
                    // Layout is recomputed from the new size on the next draw
                }
                _ => {}
            }
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
