//! Application state for the notice binary
//!
//! The [`App`] owns what the modal itself never does: the visibility flag
//! (derived from whether the dialog has been dismissed yet) and the outcome
//! recorded by the callbacks.

mod event;

pub use event::{Event, Handler};

use serde::Serialize;
use std::cell::Cell;
use tracing::info;

use crate::config::{Config, DialogSpec};
use crate::modal::Modal;

/// How the dialog was dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Closed via backdrop, close icon, Close button or Escape.
    Closed,
    /// Save was activated.
    Saved,
    /// Cancel was activated.
    Cancelled,
    /// Ctrl+C.
    Interrupted,
}

impl Outcome {
    /// Lowercase name printed on exit.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Saved => "saved",
            Self::Cancelled => "cancelled",
            Self::Interrupted => "interrupted",
        }
    }

    /// Process exit code for this outcome.
    #[must_use]
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Closed | Self::Saved => 0,
            Self::Cancelled => 1,
            Self::Interrupted => 130,
        }
    }
}

/// State of one dialog session.
#[derive(Debug)]
pub struct App {
    /// Runtime configuration.
    pub config: Config,
    /// The dialog being shown.
    pub dialog: DialogSpec,
    outcome: Cell<Option<Outcome>>,
}

impl App {
    /// Create a session showing `dialog`.
    #[must_use]
    pub const fn new(config: Config, dialog: DialogSpec) -> Self {
        Self {
            config,
            dialog,
            outcome: Cell::new(None),
        }
    }

    /// Whether the dialog is still open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.outcome.get().is_none()
    }

    /// How the dialog was dismissed, once it has been.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome.get()
    }

    /// Record `outcome` unless the dialog was already dismissed.
    pub fn finish(&self, outcome: Outcome) {
        if self.is_open() {
            info!("Dialog dismissed: {}", outcome.label());
            self.outcome.set(Some(outcome));
        }
    }

    /// Build the modal for this session, wired to record the outcome.
    #[must_use]
    pub fn modal(&self) -> Modal<'_> {
        self.dialog
            .modal(|| self.finish(Outcome::Closed))
            .on_save(|| self.finish(Outcome::Saved))
            .on_cancel(|| self.finish(Outcome::Cancelled))
            .width(self.config.dialog_width)
            .close_on_escape(self.config.close_on_escape)
            .visible(self.is_open())
    }
}
