//! Serializable description of a single dialog.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::error::{Error, Result};
use crate::modal::{Modal, ModalKind};

const fn default_true() -> bool {
    true
}

/// Everything needed to build a [`Modal`] apart from its callbacks.
///
/// Field defaults match the modal's own defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DialogSpec {
    /// Styling category.
    pub kind: ModalKind,

    /// Message shown in the dialog.
    pub message: String,

    /// Optional title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Extra content under the message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    /// Custom footer replacing the default buttons.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,

    /// Show the close icon.
    #[serde(default)]
    pub show_close_icon: bool,

    /// Close on backdrop click.
    #[serde(default = "default_true")]
    pub close_on_backdrop_click: bool,

    /// Show the default Close button.
    #[serde(default)]
    pub show_close_button: bool,

    /// Show the Save/Cancel pair.
    #[serde(default)]
    pub show_action_buttons: bool,

    /// Include Save in the action buttons.
    #[serde(default = "default_true")]
    pub show_save_button: bool,

    /// Include Cancel in the action buttons.
    #[serde(default = "default_true")]
    pub show_cancel_button: bool,
}

impl DialogSpec {
    /// Spec with only the required fields set.
    #[must_use]
    pub fn new(kind: ModalKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            title: None,
            body: None,
            footer: None,
            show_close_icon: false,
            close_on_backdrop_click: true,
            show_close_button: false,
            show_action_buttons: false,
            show_save_button: true,
            show_cancel_button: true,
        }
    }

    /// Sample spec for `kind`, used by `notice example`.
    #[must_use]
    pub fn example(kind: ModalKind) -> Self {
        let (title, message) = match kind {
            ModalKind::Success => ("Saved", "Your changes have been saved."),
            ModalKind::Error => ("Oops", "Something went wrong while saving."),
            ModalKind::Warning => ("Unsaved changes", "Save before leaving?"),
            ModalKind::Info => ("Heads up", "A new version is available."),
        };
        let mut spec = Self::new(kind, message);
        spec.title = Some(title.to_string());
        spec.show_close_icon = true;
        if kind == ModalKind::Warning {
            spec.show_action_buttons = true;
        } else {
            spec.show_close_button = true;
        }
        spec
    }

    /// Read a spec from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and [`Error::Parse`]
    /// if it does not describe a dialog.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let spec = serde_json::from_str(&content).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded dialog spec from {:?}", path);
        Ok(spec)
    }

    /// Build a modal borrowing this spec's text.
    ///
    /// Save and Cancel still need their callbacks attached before they render.
    #[must_use]
    pub fn modal<'a, F>(&'a self, on_close: F) -> Modal<'a>
    where
        F: FnMut() + 'a,
    {
        let mut modal = Modal::new(self.kind, self.message.as_str(), on_close)
            .show_close_icon(self.show_close_icon)
            .close_on_backdrop_click(self.close_on_backdrop_click)
            .show_close_button(self.show_close_button)
            .show_action_buttons(self.show_action_buttons)
            .show_save_button(self.show_save_button)
            .show_cancel_button(self.show_cancel_button);
        if let Some(title) = &self.title {
            modal = modal.title(title.as_str());
        }
        if let Some(body) = &self.body {
            modal = modal.body(body.as_str());
        }
        if let Some(footer) = &self.footer {
            modal = modal.footer(footer.as_str());
        }
        modal
    }
}
