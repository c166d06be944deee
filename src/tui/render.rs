//! TUI rendering

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::Line,
    widgets::Paragraph,
};

use crate::colors;
use crate::modal::{Modal, ModalState};

/// Key hints for the controls `modal` actually responds to.
fn hint(modal: &Modal<'_>) -> String {
    let mut parts = Vec::new();
    if modal.closes_on_escape() {
        parts.push("esc close");
    }
    if !modal.buttons().is_empty() {
        parts.push("tab focus");
        parts.push("enter activate");
    }
    parts.push("↑↓ scroll");
    parts.join(" · ")
}

/// Draw the key hint line, then the modal over the whole frame.
pub fn render(frame: &mut Frame<'_>, modal: &Modal<'_>, state: &mut ModalState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(frame.area());

    let hint = Paragraph::new(Line::from(hint(modal)).centered())
        .style(Style::default().fg(colors::TEXT_MUTED));
    frame.render_widget(hint, chunks[1]);

    frame.render_stateful_widget(modal, frame.area(), state);
}
