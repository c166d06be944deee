//! Modal kinds and their styling

use std::fmt;
use std::str::FromStr;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::colors;
use crate::error::Error;

/// Category of a dialog. Selects the border, title and button colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModalKind {
    /// Something finished successfully.
    Success,
    /// Something failed.
    Error,
    /// Something needs attention.
    Warning,
    /// Neutral information.
    Info,
}

/// Colors used to draw a dialog of a given kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindStyle {
    /// Dialog border.
    pub border: Color,
    /// Title text.
    pub title: Color,
    /// Background of the default Close button.
    pub button: Color,
}

impl ModalKind {
    /// All kinds, in display order.
    pub const ALL: &'static [Self] = &[Self::Success, Self::Error, Self::Warning, Self::Info];

    /// Lowercase name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    /// Style lookup for this kind.
    #[must_use]
    pub const fn style(self) -> KindStyle {
        match self {
            Self::Success => KindStyle {
                border: colors::SUCCESS_BORDER,
                title: colors::SUCCESS_TITLE,
                button: colors::SUCCESS_BUTTON,
            },
            Self::Error => KindStyle {
                border: colors::ERROR_BORDER,
                title: colors::ERROR_TITLE,
                button: colors::ERROR_BUTTON,
            },
            Self::Warning => KindStyle {
                border: colors::WARNING_BORDER,
                title: colors::WARNING_TITLE,
                button: colors::WARNING_BUTTON,
            },
            Self::Info => KindStyle {
                border: colors::INFO_BORDER,
                title: colors::INFO_TITLE,
                button: colors::INFO_BUTTON,
            },
        }
    }
}

impl fmt::Display for ModalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModalKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| Error::UnknownKind(trimmed.to_string()))
    }
}
