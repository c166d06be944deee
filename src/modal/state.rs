//! Caller-owned modal state.

/// Scroll offset and button focus for a [`Modal`](super::Modal).
///
/// The modal never keeps this itself; callers hold one next to whatever owns
/// the visibility flag and pass it to render and dispatch calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalState {
    /// First visible row of the scrollable content.
    pub scroll: u16,
    /// Index into [`Modal::buttons`](super::Modal::buttons) of the focused button.
    pub focus: Option<usize>,
}

impl ModalState {
    /// Fresh state: top of the content, nothing focused.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            scroll: 0,
            focus: None,
        }
    }

    /// Reset to the initial state. Call when a dialog is reopened.
    pub const fn reset(&mut self) {
        self.scroll = 0;
        self.focus = None;
    }

    /// Scroll up by `rows`, stopping at the top.
    pub const fn scroll_up(&mut self, rows: u16) {
        self.scroll = self.scroll.saturating_sub(rows);
    }

    /// Scroll down by `rows`. Clamped against the content when rendered.
    pub const fn scroll_down(&mut self, rows: u16) {
        self.scroll = self.scroll.saturating_add(rows);
    }

    pub(crate) fn clamp_scroll(&mut self, max: u16) {
        self.scroll = self.scroll.min(max);
    }

    /// Move focus forward among `count` buttons, wrapping around.
    pub const fn focus_next(&mut self, count: usize) {
        self.focus = match (self.focus, count) {
            (_, 0) => None,
            (Some(i), n) if i < n - 1 => Some(i + 1),
            _ => Some(0),
        };
    }

    /// Move focus backward among `count` buttons, wrapping around.
    pub const fn focus_prev(&mut self, count: usize) {
        self.focus = match (self.focus, count) {
            (_, 0) => None,
            (Some(i), n) if i > 0 && i < n => Some(i - 1),
            (_, n) => Some(n - 1),
        };
    }

    /// Focused index, if it still names one of `count` buttons.
    #[must_use]
    pub fn focused(&self, count: usize) -> Option<usize> {
        self.focus.filter(|&i| i < count)
    }
}
