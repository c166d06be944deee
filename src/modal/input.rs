//! Mouse and keyboard dispatch for modals.
//!
//! Clicks are classified against the layout for the current area: the close
//! icon and buttons fire their callbacks, clicks anywhere else inside the
//! dialog are absorbed, and clicks on the backdrop close the modal only when
//! backdrop dismissal is enabled.

use ratatui::{
    crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind},
    layout::Rect,
};
use tracing::debug;

use super::{Hit, Modal, ModalState};

/// Rows moved per mouse wheel notch.
const WHEEL_ROWS: u16 = 3;
/// Rows moved per page key.
const PAGE_ROWS: u16 = 10;

/// What triggered a close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseSource {
    /// Click outside the dialog.
    Backdrop,
    /// Click on the close icon.
    CloseIcon,
    /// The default Close button.
    CloseButton,
    /// The Escape key.
    Escape,
}

/// Result of feeding an event to a modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Dispatch {
    /// The modal did not react (hidden, or the event means nothing to it).
    Ignored,
    /// The modal consumed the event without invoking a callback.
    Absorbed,
    /// The close callback ran.
    Closed(CloseSource),
    /// The save callback ran.
    Saved,
    /// The cancel callback ran.
    Cancelled,
}

impl Dispatch {
    /// Whether a callback ran.
    #[must_use]
    pub const fn is_callback(self) -> bool {
        matches!(self, Self::Closed(_) | Self::Saved | Self::Cancelled)
    }
}

impl Modal<'_> {
    /// Handle a mouse event for a modal drawn into `area`.
    ///
    /// Only left clicks and the scroll wheel are handled.
    pub fn handle_mouse(
        &mut self,
        mouse: MouseEvent,
        area: Rect,
        state: &mut ModalState,
    ) -> Dispatch {
        let Some(layout) = self.layout(area) else {
            return Dispatch::Ignored;
        };
        let hit = layout.hit(mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => match hit {
                Hit::CloseIcon => {
                    debug!("Close icon clicked on {}", self.label());
                    self.close(CloseSource::CloseIcon)
                }
                Hit::Button(button) => {
                    debug!("{} clicked on {}", button.label(), self.label());
                    self.fire(button)
                }
                // Clicks inside the dialog never reach the backdrop.
                Hit::Dialog => Dispatch::Absorbed,
                Hit::Backdrop if self.close_on_backdrop_click => {
                    debug!("Backdrop clicked, closing {}", self.label());
                    self.close(CloseSource::Backdrop)
                }
                Hit::Backdrop => Dispatch::Absorbed,
            },
            MouseEventKind::ScrollUp if hit != Hit::Backdrop => {
                state.scroll_up(WHEEL_ROWS);
                Dispatch::Absorbed
            }
            MouseEventKind::ScrollDown if hit != Hit::Backdrop => {
                state.scroll_down(WHEEL_ROWS);
                state.clamp_scroll(layout.max_scroll());
                Dispatch::Absorbed
            }
            _ => Dispatch::Ignored,
        }
    }

    /// Handle a key event.
    ///
    /// Escape closes (when enabled), Tab and the arrow keys move button
    /// focus, Enter activates the focused button, and the vertical keys
    /// scroll.
    pub fn handle_key(&mut self, key: KeyEvent, state: &mut ModalState) -> Dispatch {
        if !self.visible || key.kind != KeyEventKind::Press {
            return Dispatch::Ignored;
        }
        let buttons = self.buttons();

        match key.code {
            KeyCode::Esc if self.close_on_escape => {
                debug!("Escape pressed, closing {}", self.label());
                self.close(CloseSource::Escape)
            }
            KeyCode::Tab | KeyCode::Right => {
                state.focus_next(buttons.len());
                Dispatch::Absorbed
            }
            KeyCode::BackTab | KeyCode::Left => {
                state.focus_prev(buttons.len());
                Dispatch::Absorbed
            }
            KeyCode::Enter => match state.focused(buttons.len()) {
                Some(index) => {
                    debug!("{} activated on {}", buttons[index].label(), self.label());
                    self.fire(buttons[index])
                }
                None => Dispatch::Ignored,
            },
            KeyCode::Up => {
                state.scroll_up(1);
                Dispatch::Absorbed
            }
            KeyCode::Down => {
                state.scroll_down(1);
                Dispatch::Absorbed
            }
            KeyCode::PageUp => {
                state.scroll_up(PAGE_ROWS);
                Dispatch::Absorbed
            }
            KeyCode::PageDown => {
                state.scroll_down(PAGE_ROWS);
                Dispatch::Absorbed
            }
            KeyCode::Home => {
                state.scroll = 0;
                Dispatch::Absorbed
            }
            KeyCode::End => {
                state.scroll = u16::MAX;
                Dispatch::Absorbed
            }
            _ => Dispatch::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modal::{Button, ModalKind};
    use ratatui::crossterm::event::KeyModifiers;
    use std::cell::Cell;

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };

    fn left_click(x: u16, y: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: x,
            row: y,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn wheel(kind: MouseEventKind, x: u16, y: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column: x,
            row: y,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_backdrop_click_closes_by_default() {
        let closes = Cell::new(0);
        let mut modal = Modal::new(ModalKind::Error, "Failed", || closes.set(closes.get() + 1));
        let mut state = ModalState::new();

        let dispatch = modal.handle_mouse(left_click(0, 0), AREA, &mut state);
        assert_eq!(dispatch, Dispatch::Closed(CloseSource::Backdrop));
        assert_eq!(closes.get(), 1);
    }

    #[test]
    fn test_backdrop_click_ignored_when_disabled() {
        let closes = Cell::new(0);
        let mut modal = Modal::new(ModalKind::Error, "Failed", || closes.set(closes.get() + 1))
            .close_on_backdrop_click(false);
        let mut state = ModalState::new();

        let dispatch = modal.handle_mouse(left_click(0, 0), AREA, &mut state);
        assert_eq!(dispatch, Dispatch::Absorbed);
        assert_eq!(closes.get(), 0);
    }

    #[test]
    fn test_click_inside_dialog_does_not_close() -> Result<(), &'static str> {
        let closes = Cell::new(0);
        let mut modal = Modal::new(ModalKind::Info, "Inside", || closes.set(closes.get() + 1));
        let mut state = ModalState::new();
        let layout = modal.layout(AREA).ok_or("visible modal has a layout")?;

        for (x, y) in [
            (layout.dialog.x, layout.dialog.y),
            (layout.content.x, layout.content.y),
            (layout.dialog.right() - 1, layout.dialog.bottom() - 1),
        ] {
            let dispatch = modal.handle_mouse(left_click(x, y), AREA, &mut state);
            assert_eq!(dispatch, Dispatch::Absorbed);
        }
        assert_eq!(closes.get(), 0);
        Ok(())
    }

    #[test]
    fn test_close_icon_click_closes_even_without_backdrop_dismiss() {
        let closes = Cell::new(0);
        let mut modal = Modal::new(ModalKind::Info, "x", || closes.set(closes.get() + 1))
            .show_close_icon(true)
            .close_on_backdrop_click(false);
        let mut state = ModalState::new();
        let icon = modal
            .layout(AREA)
            .and_then(|layout| layout.close_icon)
            .unwrap_or_default();

        let dispatch = modal.handle_mouse(left_click(icon.x + 1, icon.y), AREA, &mut state);
        assert_eq!(dispatch, Dispatch::Closed(CloseSource::CloseIcon));
        assert_eq!(closes.get(), 1);
    }

    #[test]
    fn test_button_clicks_fire_their_callbacks() {
        let closes = Cell::new(0);
        let saves = Cell::new(0);
        let cancels = Cell::new(0);
        let mut modal = Modal::new(ModalKind::Info, "Edit", || closes.set(closes.get() + 1))
            .show_close_button(true)
            .show_action_buttons(true)
            .on_save(|| saves.set(saves.get() + 1))
            .on_cancel(|| cancels.set(cancels.get() + 1));
        let mut state = ModalState::new();
        let buttons = modal.layout(AREA).map(|l| l.buttons).unwrap_or_default();
        assert_eq!(buttons.len(), 3);

        for (button, rect) in buttons {
            let dispatch = modal.handle_mouse(left_click(rect.x, rect.y), AREA, &mut state);
            let expected = match button {
                Button::Close => Dispatch::Closed(CloseSource::CloseButton),
                Button::Save => Dispatch::Saved,
                Button::Cancel => Dispatch::Cancelled,
            };
            assert_eq!(dispatch, expected);
        }
        assert_eq!((closes.get(), saves.get(), cancels.get()), (1, 1, 1));
    }

    #[test]
    fn test_hidden_modal_ignores_events() {
        let closes = Cell::new(0);
        let mut modal =
            Modal::new(ModalKind::Info, "x", || closes.set(closes.get() + 1)).visible(false);
        let mut state = ModalState::new();

        assert_eq!(
            modal.handle_mouse(left_click(0, 0), AREA, &mut state),
            Dispatch::Ignored
        );
        assert_eq!(modal.handle_key(press(KeyCode::Esc), &mut state), Dispatch::Ignored);
        assert_eq!(closes.get(), 0);
    }

    #[test]
    fn test_escape_closes_unless_disabled() {
        let closes = Cell::new(0);
        let mut modal = Modal::new(ModalKind::Info, "x", || closes.set(closes.get() + 1));
        let mut state = ModalState::new();
        assert_eq!(
            modal.handle_key(press(KeyCode::Esc), &mut state),
            Dispatch::Closed(CloseSource::Escape)
        );

        let mut modal = modal.close_on_escape(false);
        assert_eq!(modal.handle_key(press(KeyCode::Esc), &mut state), Dispatch::Ignored);
        assert_eq!(closes.get(), 1);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut modal = Modal::new(ModalKind::Info, "x", || {});
        let mut state = ModalState::new();
        let mut release = press(KeyCode::Esc);
        release.kind = KeyEventKind::Release;
        assert_eq!(modal.handle_key(release, &mut state), Dispatch::Ignored);
    }

    #[test]
    fn test_tab_then_enter_activates_focused_button() {
        let saves = Cell::new(0);
        let cancels = Cell::new(0);
        let mut modal = Modal::new(ModalKind::Info, "Edit", || {})
            .show_action_buttons(true)
            .on_save(|| saves.set(saves.get() + 1))
            .on_cancel(|| cancels.set(cancels.get() + 1));
        let mut state = ModalState::new();

        assert_eq!(modal.handle_key(press(KeyCode::Enter), &mut state), Dispatch::Ignored);
        assert_eq!(modal.handle_key(press(KeyCode::Tab), &mut state), Dispatch::Absorbed);
        assert_eq!(modal.handle_key(press(KeyCode::Tab), &mut state), Dispatch::Absorbed);
        assert_eq!(modal.handle_key(press(KeyCode::Enter), &mut state), Dispatch::Cancelled);
        assert_eq!(modal.handle_key(press(KeyCode::Left), &mut state), Dispatch::Absorbed);
        assert_eq!(modal.handle_key(press(KeyCode::Enter), &mut state), Dispatch::Saved);
        assert_eq!((saves.get(), cancels.get()), (1, 1));
    }

    #[test]
    fn test_wheel_scrolls_inside_dialog_only() {
        let message = (0..80)
            .map(|i| format!("row {i}"))
            .collect::<Vec<_>>()
            .join("\n");
        let mut modal = Modal::new(ModalKind::Info, message, || {});
        let mut state = ModalState::new();
        let content = modal.layout(AREA).map(|l| l.content).unwrap_or_default();

        let down = wheel(MouseEventKind::ScrollDown, content.x, content.y);
        assert_eq!(modal.handle_mouse(down, AREA, &mut state), Dispatch::Absorbed);
        assert_eq!(state.scroll, WHEEL_ROWS);

        let outside = wheel(MouseEventKind::ScrollDown, 0, 0);
        assert_eq!(modal.handle_mouse(outside, AREA, &mut state), Dispatch::Ignored);
        assert_eq!(state.scroll, WHEEL_ROWS);

        let up = wheel(MouseEventKind::ScrollUp, content.x, content.y);
        assert_eq!(modal.handle_mouse(up, AREA, &mut state), Dispatch::Absorbed);
        assert_eq!(state.scroll, 0);
    }

    #[test]
    fn test_dispatch_is_callback() {
        assert!(Dispatch::Saved.is_callback());
        assert!(Dispatch::Closed(CloseSource::Escape).is_callback());
        assert!(!Dispatch::Absorbed.is_callback());
        assert!(!Dispatch::Ignored.is_callback());
    }
}
