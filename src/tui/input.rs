//! Event dispatch for the dialog

use ratatui::{
    crossterm::event::{KeyCode, KeyEventKind, KeyModifiers},
    layout::Rect,
};
use tracing::debug;

use crate::app::{App, Event, Outcome};
use crate::modal::{Dispatch, Modal, ModalState};

/// Feed one event to the modal.
///
/// Ctrl+C interrupts the session regardless of the modal's settings; all
/// other keys and mouse events go to the modal.
pub fn handle_event(
    app: &App,
    modal: &mut Modal<'_>,
    state: &mut ModalState,
    event: Event,
    area: Rect,
) -> Dispatch {
    let dispatch = match event {
        Event::Key(key)
            if key.kind == KeyEventKind::Press
                && key.code == KeyCode::Char('c')
                && key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.finish(Outcome::Interrupted);
            Dispatch::Absorbed
        }
        Event::Key(key) => modal.handle_key(key, state),
        Event::Mouse(mouse) => modal.handle_mouse(mouse, area, state),
        Event::Tick | Event::Resize(_, _) => Dispatch::Ignored,
    };

    if dispatch != Dispatch::Ignored {
        debug!("Event {:?} -> {:?}", event, dispatch);
    }
    dispatch
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, DialogSpec};
    use crate::modal::ModalKind;
    use ratatui::crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };

    fn create_test_app(configure: impl FnOnce(&mut DialogSpec)) -> App {
        let mut dialog = DialogSpec::new(ModalKind::Info, "Heads up");
        configure(&mut dialog);
        App::new(Config::default(), dialog)
    }

    fn click(x: u16, y: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: x,
            row: y,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_ctrl_c_interrupts() {
        let app = create_test_app(|_| {});
        let mut modal = app.modal();
        let mut state = ModalState::new();
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));

        let dispatch = handle_event(&app, &mut modal, &mut state, ctrl_c, AREA);
        assert_eq!(dispatch, Dispatch::Absorbed);
        assert_eq!(app.outcome(), Some(Outcome::Interrupted));
    }

    #[test]
    fn test_backdrop_click_respects_dialog_flag() {
        let app = create_test_app(|d| d.close_on_backdrop_click = false);
        let mut modal = app.modal();
        let mut state = ModalState::new();
        let _ = handle_event(&app, &mut modal, &mut state, click(0, 0), AREA);
        assert!(app.is_open());

        let app = create_test_app(|_| {});
        let mut modal = app.modal();
        let _ = handle_event(&app, &mut modal, &mut state, click(0, 0), AREA);
        assert_eq!(app.outcome(), Some(Outcome::Closed));
    }

    #[test]
    fn test_cancel_button_click() {
        let app = create_test_app(|d| d.show_action_buttons = true);
        let mut modal = app.modal();
        let mut state = ModalState::new();
        let cancel = modal
            .layout(AREA)
            .and_then(|layout| layout.buttons.last().map(|(_, rect)| *rect))
            .unwrap_or_default();

        let dispatch = handle_event(&app, &mut modal, &mut state, click(cancel.x, cancel.y), AREA);
        assert_eq!(dispatch, Dispatch::Cancelled);
        assert_eq!(app.outcome(), Some(Outcome::Cancelled));
    }

    #[test]
    fn test_ticks_and_resizes_are_ignored() {
        let app = create_test_app(|_| {});
        let mut modal = app.modal();
        let mut state = ModalState::new();
        for event in [Event::Tick, Event::Resize(100, 40)] {
            let dispatch = handle_event(&app, &mut modal, &mut state, event, AREA);
            assert_eq!(dispatch, Dispatch::Ignored);
        }
        assert!(app.is_open());
    }
}
