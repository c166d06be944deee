//! Dialog geometry
//!
//! Layout is computed from the area and the wrapped content on every call, so
//! input handlers can hit-test clicks without storing anything from the last
//! render.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};

/// Columns of margin kept between the dialog and each side of the area.
pub const SIDE_MARGIN: u16 = 2;
/// Blank rows above and below the content, inside the border.
pub const V_PAD: u16 = 1;
/// Blank columns left and right of the content, inside the border.
pub const H_PAD: u16 = 2;
/// Columns between adjacent buttons.
pub const BUTTON_GAP: u16 = 2;
/// Width of the close icon hit area on the top border.
pub const CLOSE_ICON_WIDTH: u16 = 3;

/// One of the default buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// Dismisses the dialog through the close callback.
    Close,
    /// Invokes the save callback.
    Save,
    /// Invokes the cancel callback.
    Cancel,
}

impl Button {
    /// Text shown on the button.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Close => "Close",
            Self::Save => "Save",
            Self::Cancel => "Cancel",
        }
    }

    /// Label with button padding applied, as drawn.
    #[must_use]
    pub fn padded_label(self) -> String {
        format!("  {}  ", self.label())
    }

    /// Drawn width in columns.
    #[must_use]
    pub fn width(self) -> u16 {
        u16::try_from(self.padded_label().chars().count()).unwrap_or(u16::MAX)
    }
}

/// What a screen position falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// Outside the dialog.
    Backdrop,
    /// Inside the dialog, not on a control.
    Dialog,
    /// On the close icon.
    CloseIcon,
    /// On a default button.
    Button(Button),
}

/// Resolved on-screen geometry of a visible dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalLayout {
    /// The whole area, dimmed behind the dialog.
    pub backdrop: Rect,
    /// Dialog including its border.
    pub dialog: Rect,
    /// Viewport for the scrollable title/message/body lines.
    pub content: Rect,
    /// Pinned row holding the custom footer or the default buttons.
    pub footer: Option<Rect>,
    /// Close icon hit area, when enabled and the dialog is wide enough.
    pub close_icon: Option<Rect>,
    /// Default buttons in display order with their hit areas.
    pub buttons: Vec<(Button, Rect)>,
    /// Total number of wrapped content lines.
    pub content_height: u16,
}

impl ModalLayout {
    /// Largest useful scroll offset for the content viewport.
    #[must_use]
    pub const fn max_scroll(&self) -> u16 {
        self.content_height.saturating_sub(self.content.height)
    }

    /// Classify a screen position.
    #[must_use]
    pub fn hit(&self, x: u16, y: u16) -> Hit {
        if let Some(icon) = self.close_icon
            && rect_contains(icon, x, y)
        {
            return Hit::CloseIcon;
        }

        if let Some((button, _)) = self
            .buttons
            .iter()
            .find(|(_, rect)| rect_contains(*rect, x, y))
        {
            return Hit::Button(*button);
        }

        if rect_contains(self.dialog, x, y) {
            Hit::Dialog
        } else {
            Hit::Backdrop
        }
    }
}

/// Inputs for [`compute`] that do not depend on the text itself.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Chrome {
    pub preferred_width: u16,
    pub has_footer_row: bool,
    pub close_icon: bool,
}

/// Center a `width` x `height` rect inside `area`.
#[must_use]
pub const fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = if width < area.width { width } else { area.width };
    let height = if height < area.height {
        height
    } else {
        area.height
    };
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Whether `(x, y)` falls inside `rect`.
#[must_use]
pub const fn rect_contains(rect: Rect, x: u16, y: u16) -> bool {
    let within_x = x >= rect.x && x < rect.x.saturating_add(rect.width);
    let within_y = y >= rect.y && y < rect.y.saturating_add(rect.height);
    within_x && within_y
}

/// Dialog width for `area`: the preferred width minus side margins, but
/// never wider than the area.
pub(crate) fn dialog_width(preferred: u16, area: Rect) -> u16 {
    let available = area.width.saturating_sub(SIDE_MARGIN * 2);
    preferred.min(available).max(area.width.min(8))
}

/// Columns available to wrapped text inside a dialog of `width`.
pub(crate) const fn text_width(width: u16) -> u16 {
    let inner = width.saturating_sub(2 + H_PAD * 2);
    if inner == 0 { 1 } else { inner }
}

/// Maximum dialog height for `area`: 90% of it rounded down, but never
/// less than the two border rows when the area allows.
pub(crate) fn max_height(area: Rect) -> u16 {
    let ninety = u16::try_from(u32::from(area.height) * 9 / 10).unwrap_or(u16::MAX);
    ninety.max(area.height.min(2))
}

/// Compute the layout of a dialog holding `content_lines` wrapped lines.
pub(crate) fn compute(
    area: Rect,
    chrome: Chrome,
    content_lines: usize,
    buttons: &[Button],
) -> ModalLayout {
    let width = dialog_width(chrome.preferred_width, area);
    let content_height = u16::try_from(content_lines).unwrap_or(u16::MAX);
    let footer_rows: u16 = if chrome.has_footer_row { 2 } else { 0 };

    let desired = content_height
        .saturating_add(2)
        .saturating_add(V_PAD * 2)
        .saturating_add(footer_rows);
    let height = desired.min(max_height(area));
    let dialog = centered_rect(width, height, area);

    let inner = Rect {
        x: dialog.x.saturating_add(1),
        y: dialog.y.saturating_add(1),
        width: dialog.width.saturating_sub(2),
        height: dialog.height.saturating_sub(2),
    };
    let text_x = inner.x.saturating_add(H_PAD.min(inner.width / 2));
    let text_w = inner.width.saturating_sub(H_PAD * 2).max(inner.width.min(1));

    let footer = chrome.has_footer_row.then(|| Rect {
        x: text_x,
        y: inner
            .y
            .saturating_add(inner.height.saturating_sub(V_PAD + 1)),
        width: text_w,
        height: u16::from(inner.height > V_PAD),
    });

    let content = Rect {
        x: text_x,
        y: inner.y.saturating_add(V_PAD.min(inner.height)),
        width: text_w,
        height: inner
            .height
            .saturating_sub(V_PAD * 2)
            .saturating_sub(footer_rows),
    };

    let close_icon = (chrome.close_icon && dialog.width >= CLOSE_ICON_WIDTH + 5).then(|| Rect {
        x: dialog.right().saturating_sub(CLOSE_ICON_WIDTH + 1),
        y: dialog.y,
        width: CLOSE_ICON_WIDTH,
        height: 1,
    });

    let buttons = footer.map_or_else(Vec::new, |row| layout_buttons(buttons, row));

    ModalLayout {
        backdrop: area,
        dialog,
        content,
        footer,
        close_icon,
        buttons,
        content_height,
    }
}

fn layout_buttons(buttons: &[Button], row: Rect) -> Vec<(Button, Rect)> {
    if buttons.is_empty() || row.height == 0 {
        return Vec::new();
    }

    let gaps = BUTTON_GAP.saturating_mul(u16::try_from(buttons.len() - 1).unwrap_or(u16::MAX));
    let total = buttons
        .iter()
        .fold(gaps, |acc, button| acc.saturating_add(button.width()));
    let mut x = row.x.saturating_add(row.width.saturating_sub(total) / 2);

    let mut placed = Vec::with_capacity(buttons.len());
    for &button in buttons {
        let rect = Rect {
            x,
            y: row.y,
            width: button.width(),
            height: 1,
        }
        .intersection(row);
        if !rect.is_empty() {
            placed.push((button, rect));
        }
        x = x.saturating_add(button.width()).saturating_add(BUTTON_GAP);
    }
    placed
}

/// Word-wrap styled text to `width` columns, centering every line.
///
/// Whitespace inside spans separates words; adjacent spans without
/// whitespace between them stay glued. Words wider than `width` are split.
#[must_use]
pub fn wrap_text(text: &Text<'_>, base: Style, width: u16) -> Vec<Line<'static>> {
    let base = base.patch(text.style);
    text.lines
        .iter()
        .flat_map(|line| wrap_line(line, base, usize::from(width.max(1))))
        .collect()
}

fn wrap_line(line: &Line<'_>, base: Style, width: usize) -> Vec<Line<'static>> {
    let mut wrapper = Wrapper::new(width);
    let line_style = base.patch(line.style);

    for span in &line.spans {
        let style = line_style.patch(span.style);
        let content = span.content.as_ref();
        if content.starts_with(char::is_whitespace) {
            wrapper.pending_space = true;
        }
        for (i, word) in content.split_whitespace().enumerate() {
            if i > 0 {
                wrapper.pending_space = true;
            }
            wrapper.push_word(word, style);
        }
        if content.ends_with(char::is_whitespace) {
            wrapper.pending_space = true;
        }
    }

    wrapper.finish()
}

struct Wrapper {
    width: usize,
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
    current_width: usize,
    pending_space: bool,
}

impl Wrapper {
    const fn new(width: usize) -> Self {
        Self {
            width,
            lines: Vec::new(),
            current: Vec::new(),
            current_width: 0,
            pending_space: false,
        }
    }

    fn push_word(&mut self, word: &str, style: Style) {
        let word_width = Span::raw(word).width();
        let space = usize::from(self.pending_space && self.current_width > 0);

        if self.current_width > 0 && self.current_width + space + word_width > self.width {
            self.break_line();
        } else if space == 1 {
            self.current.push(Span::styled(" ", style));
            self.current_width += 1;
        }
        self.pending_space = false;

        if word_width <= self.width - self.current_width {
            self.current.push(Span::styled(word.to_string(), style));
            self.current_width += word_width;
            return;
        }

        // Longer than a whole line: hard split.
        let mut chunk = String::new();
        let mut chunk_width = 0;
        for ch in word.chars() {
            let ch_width = Span::raw(ch.to_string()).width();
            if self.current_width + chunk_width + ch_width > self.width && !chunk.is_empty() {
                self.current.push(Span::styled(std::mem::take(&mut chunk), style));
                self.current_width += chunk_width;
                chunk_width = 0;
                self.break_line();
            }
            chunk.push(ch);
            chunk_width += ch_width;
        }
        if !chunk.is_empty() {
            self.current.push(Span::styled(chunk, style));
            self.current_width += chunk_width;
        }
    }

    fn break_line(&mut self) {
        let spans = std::mem::take(&mut self.current);
        self.lines.push(Line::from(spans).centered());
        self.current_width = 0;
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        if !self.current.is_empty() || self.lines.is_empty() {
            self.break_line();
        }
        self.lines
    }
}
