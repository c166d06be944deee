//! notice - styled modal dialogs for terminal UIs
//!
//! The [`modal`] module provides the [`Modal`] widget: a success, error,
//! warning or info dialog with an optional title, close icon, default
//! buttons and backdrop dismissal, drawn with ratatui. The rest of the crate
//! is the `notice` binary that shows a single dialog and reports how it was
//! dismissed.

mod colors;

pub mod app;
pub mod config;
pub mod error;
pub mod modal;
pub mod paths;
pub mod tui;

pub use app::{App, Outcome};
pub use config::{Config, DialogSpec};
pub use error::{Error, Result};
pub use modal::{Modal, ModalKind, ModalState};
