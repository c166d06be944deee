//! Terminal front end for notice
//!
//! Sets up the terminal, then draws the dialog and feeds it events until the
//! app records an outcome.

mod input;
mod render;

pub use input::handle_event;
pub use render::render;

use anyhow::{Context, Result};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    crossterm::{
        event::{DisableMouseCapture, EnableMouseCapture},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use std::io;
use tracing::debug;

use crate::app::{App, Event, Handler, Outcome};
use crate::modal::ModalState;

/// Run the dialog until it is dismissed
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up, drawn to, or polled.
pub fn run(app: &App) -> Result<Outcome> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if app.config.mouse_capture {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let handler = Handler::new(app.config.poll_interval_ms);
    let result = run_loop(&mut terminal, app, || handler.next());

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

/// Draw and dispatch until the app has an outcome
///
/// `next_event` supplies events; the real terminal uses [`Handler::next`].
///
/// # Errors
///
/// Returns an error if drawing fails or `next_event` does.
pub fn run_loop<B, F>(terminal: &mut Terminal<B>, app: &App, mut next_event: F) -> Result<Outcome>
where
    B: Backend,
    F: FnMut() -> Result<Event>,
{
    let mut modal = app.modal();
    let mut state = ModalState::new();
    debug!("Showing {}", modal.label());

    loop {
        modal.set_visible(app.is_open());
        let area = terminal.draw(|frame| render(frame, &modal, &mut state))?.area;

        if let Some(outcome) = app.outcome() {
            return Ok(outcome);
        }

        let event = next_event()?;
        handle_event(app, &mut modal, &mut state, event, area);
    }
}
