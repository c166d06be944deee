//! Modal dialog widget
//!
//! A [`Modal`] draws a centered dialog over a dimmed backdrop. It holds the
//! whole display configuration for one render; the caller owns visibility
//! (and [`ModalState`]) and passes them in every frame. When the modal is
//! hidden it draws nothing and ignores every event.
//!
//! ```no_run
//! use std::cell::Cell;
//! use notice::modal::{Modal, ModalKind};
//!
//! let closed = Cell::new(false);
//! let modal = Modal::new(ModalKind::Error, "Failed", || closed.set(true))
//!     .title("Oops")
//!     .show_close_icon(true);
//! # let _ = modal;
//! ```

mod input;
mod kind;
mod layout;
mod state;

pub use input::{CloseSource, Dispatch};
pub use kind::{KindStyle, ModalKind};
pub use layout::{Button, Hit, ModalLayout, centered_rect, rect_contains, wrap_text};
pub use state::ModalState;

use std::fmt;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Clear, Paragraph, StatefulWidget, Widget},
};

use crate::colors;
use layout::Chrome;

/// Callback invoked when the user activates a control.
pub type Callback<'a> = Box<dyn FnMut() + 'a>;

/// Default dialog width in columns.
pub const DEFAULT_WIDTH: u16 = 50;

/// Styled dialog overlay.
pub struct Modal<'a> {
    kind: ModalKind,
    visible: bool,
    title: Option<Line<'a>>,
    message: Text<'a>,
    body: Option<Text<'a>>,
    footer: Option<Line<'a>>,
    show_close_icon: bool,
    close_on_backdrop_click: bool,
    close_on_escape: bool,
    show_close_button: bool,
    show_action_buttons: bool,
    show_save_button: bool,
    show_cancel_button: bool,
    width: u16,
    on_close: Callback<'a>,
    on_save: Option<Callback<'a>>,
    on_cancel: Option<Callback<'a>>,
}

impl<'a> Modal<'a> {
    /// Create a visible modal of `kind` showing `message`.
    ///
    /// `on_close` runs on backdrop clicks (when enabled), the close icon,
    /// the Close button and Escape.
    #[must_use]
    pub fn new<T, F>(kind: ModalKind, message: T, on_close: F) -> Self
    where
        T: Into<Text<'a>>,
        F: FnMut() + 'a,
    {
        Self {
            kind,
            visible: true,
            title: None,
            message: message.into(),
            body: None,
            footer: None,
            show_close_icon: false,
            close_on_backdrop_click: true,
            close_on_escape: true,
            show_close_button: false,
            show_action_buttons: false,
            show_save_button: true,
            show_cancel_button: true,
            width: DEFAULT_WIDTH,
            on_close: Box::new(on_close),
            on_save: None,
            on_cancel: None,
        }
    }

    /// Set visibility.
    #[must_use]
    pub const fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Set visibility in place, for modals kept across frames.
    pub const fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Whether the modal currently draws anything.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether Escape dismisses the modal.
    #[must_use]
    pub const fn closes_on_escape(&self) -> bool {
        self.close_on_escape
    }

    /// Kind of this modal.
    #[must_use]
    pub const fn kind(&self) -> ModalKind {
        self.kind
    }

    /// Title drawn above the message.
    #[must_use]
    pub fn title<T: Into<Line<'a>>>(mut self, title: T) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Extra content drawn under the message.
    #[must_use]
    pub fn body<T: Into<Text<'a>>>(mut self, body: T) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Replace the default buttons with a custom footer line.
    #[must_use]
    pub fn footer<T: Into<Line<'a>>>(mut self, footer: T) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// Show a close icon in the top-right corner.
    #[must_use]
    pub const fn show_close_icon(mut self, show: bool) -> Self {
        self.show_close_icon = show;
        self
    }

    /// Close when the backdrop is clicked. On by default.
    #[must_use]
    pub const fn close_on_backdrop_click(mut self, close: bool) -> Self {
        self.close_on_backdrop_click = close;
        self
    }

    /// Close on Escape. On by default.
    #[must_use]
    pub const fn close_on_escape(mut self, close: bool) -> Self {
        self.close_on_escape = close;
        self
    }

    /// Show the default Close button.
    #[must_use]
    pub const fn show_close_button(mut self, show: bool) -> Self {
        self.show_close_button = show;
        self
    }

    /// Show the Save/Cancel pair.
    #[must_use]
    pub const fn show_action_buttons(mut self, show: bool) -> Self {
        self.show_action_buttons = show;
        self
    }

    /// Include Save in the action buttons. On by default.
    #[must_use]
    pub const fn show_save_button(mut self, show: bool) -> Self {
        self.show_save_button = show;
        self
    }

    /// Include Cancel in the action buttons. On by default.
    #[must_use]
    pub const fn show_cancel_button(mut self, show: bool) -> Self {
        self.show_cancel_button = show;
        self
    }

    /// Preferred dialog width in columns.
    #[must_use]
    pub const fn width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    /// Callback for the Save button. Save only renders when this is set.
    #[must_use]
    pub fn on_save<F: FnMut() + 'a>(mut self, on_save: F) -> Self {
        self.on_save = Some(Box::new(on_save));
        self
    }

    /// Callback for the Cancel button. Cancel only renders when this is set.
    #[must_use]
    pub fn on_cancel<F: FnMut() + 'a>(mut self, on_cancel: F) -> Self {
        self.on_cancel = Some(Box::new(on_cancel));
        self
    }

    /// Accessible label: the title text, or `"<kind> Modal"` without one.
    #[must_use]
    pub fn label(&self) -> String {
        self.title.as_ref().map_or_else(
            || format!("{} Modal", self.kind.name()),
            |title| title.spans.iter().map(|s| s.content.as_ref()).collect(),
        )
    }

    /// Default buttons that render, in display order.
    ///
    /// Empty when a custom footer is set.
    #[must_use]
    pub fn buttons(&self) -> Vec<Button> {
        let mut buttons = Vec::new();
        if self.footer.is_some() {
            return buttons;
        }
        if self.show_close_button {
            buttons.push(Button::Close);
        }
        if self.show_action_buttons {
            if self.show_save_button && self.on_save.is_some() {
                buttons.push(Button::Save);
            }
            if self.show_cancel_button && self.on_cancel.is_some() {
                buttons.push(Button::Cancel);
            }
        }
        buttons
    }

    /// Geometry of the dialog inside `area`, or `None` while hidden.
    #[must_use]
    pub fn layout(&self, area: Rect) -> Option<ModalLayout> {
        self.compose(area).map(|(layout, _)| layout)
    }

    fn compose(&self, area: Rect) -> Option<(ModalLayout, Vec<Line<'static>>)> {
        if !self.visible || area.is_empty() {
            return None;
        }

        let width = layout::dialog_width(self.width, area);
        let lines = self.content_lines(layout::text_width(width));
        let buttons = self.buttons();
        let chrome = Chrome {
            preferred_width: self.width,
            has_footer_row: self.footer.is_some() || !buttons.is_empty(),
            close_icon: self.show_close_icon,
        };

        Some((layout::compute(area, chrome, lines.len(), &buttons), lines))
    }

    fn content_lines(&self, width: u16) -> Vec<Line<'static>> {
        let style = self.kind.style();
        let text_style = Style::default().fg(colors::TEXT_PRIMARY);
        let mut sections = Vec::new();

        if let Some(title) = &self.title {
            let title_style = Style::default()
                .fg(style.title)
                .add_modifier(Modifier::BOLD);
            sections.push(wrap_text(&Text::from(title.clone()), title_style, width));
        }
        if self.message.width() > 0 {
            sections.push(wrap_text(&self.message, text_style, width));
        }
        if let Some(body) = &self.body {
            sections.push(wrap_text(body, text_style, width));
        }

        let mut lines = Vec::new();
        for section in sections {
            if !lines.is_empty() {
                lines.push(Line::default());
            }
            lines.extend(section);
        }
        lines
    }

    fn button_style(&self, button: Button, focused: bool) -> Style {
        let bg = match button {
            Button::Close => self.kind.style().button,
            Button::Save => colors::SAVE_BUTTON,
            Button::Cancel => colors::CANCEL_BUTTON,
        };
        let style = Style::default()
            .fg(colors::BUTTON_TEXT)
            .bg(bg)
            .add_modifier(Modifier::BOLD);
        if focused {
            style.add_modifier(Modifier::UNDERLINED | Modifier::REVERSED)
        } else {
            style
        }
    }

    pub(crate) fn fire(&mut self, button: Button) -> Dispatch {
        match button {
            Button::Close => {
                (self.on_close)();
                Dispatch::Closed(CloseSource::CloseButton)
            }
            Button::Save => self.on_save.as_mut().map_or(Dispatch::Ignored, |on_save| {
                on_save();
                Dispatch::Saved
            }),
            Button::Cancel => self
                .on_cancel
                .as_mut()
                .map_or(Dispatch::Ignored, |on_cancel| {
                    on_cancel();
                    Dispatch::Cancelled
                }),
        }
    }

    pub(crate) fn close(&mut self, source: CloseSource) -> Dispatch {
        (self.on_close)();
        Dispatch::Closed(source)
    }
}

impl fmt::Debug for Modal<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Modal")
            .field("kind", &self.kind)
            .field("visible", &self.visible)
            .field("title", &self.title)
            .field("message", &self.message)
            .field("body", &self.body)
            .field("footer", &self.footer)
            .field("show_close_icon", &self.show_close_icon)
            .field("close_on_backdrop_click", &self.close_on_backdrop_click)
            .field("close_on_escape", &self.close_on_escape)
            .field("show_close_button", &self.show_close_button)
            .field("show_action_buttons", &self.show_action_buttons)
            .field("show_save_button", &self.show_save_button)
            .field("show_cancel_button", &self.show_cancel_button)
            .field("width", &self.width)
            .field("on_save", &self.on_save.is_some())
            .field("on_cancel", &self.on_cancel.is_some())
            .finish_non_exhaustive()
    }
}

impl StatefulWidget for &Modal<'_> {
    type State = ModalState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let Some((layout, lines)) = self.compose(area) else {
            return;
        };
        let style = self.kind.style();
        state.clamp_scroll(layout.max_scroll());

        buf.set_style(
            layout.backdrop,
            Style::default()
                .bg(colors::BACKDROP)
                .add_modifier(Modifier::DIM),
        );

        Clear.render(layout.dialog, buf);
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(style.border))
            .style(Style::default().bg(colors::MODAL_BG))
            .render(layout.dialog, buf);

        Paragraph::new(lines)
            .scroll((state.scroll, 0))
            .render(layout.content, buf);

        if let (Some(row), Some(footer)) = (layout.footer, &self.footer) {
            Paragraph::new(footer.clone().centered()).render(row, buf);
        }

        let focused = state.focused(layout.buttons.len());
        for (i, (button, rect)) in layout.buttons.iter().enumerate() {
            let span = Span::styled(
                button.padded_label(),
                self.button_style(*button, focused == Some(i)),
            );
            buf.set_span(rect.x, rect.y, &span, rect.width);
        }

        if let Some(icon) = layout.close_icon {
            buf.set_string(
                icon.x,
                icon.y,
                " ✕ ",
                Style::default()
                    .fg(colors::TEXT_DIM)
                    .bg(colors::MODAL_BG)
                    .add_modifier(Modifier::BOLD),
            );
        }
    }
}

impl Widget for &Modal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut state = ModalState::new();
        StatefulWidget::render(self, area, buf, &mut state);
    }
}
