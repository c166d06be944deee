//! Configuration management for notice

mod dialog;

pub use dialog::DialogSpec;

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

use crate::modal::DEFAULT_WIDTH;
use crate::paths;

/// Runtime configuration for the notice binary
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Event poll interval in milliseconds
    pub poll_interval_ms: u64,

    /// Preferred dialog width in columns
    pub dialog_width: u16,

    /// Whether Escape dismisses the dialog
    pub close_on_escape: bool,

    /// Whether to capture the mouse (needed for clicks and the wheel)
    pub mouse_capture: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            poll_interval_ms: 100,
            dialog_width: DEFAULT_WIDTH,
            close_on_escape: true,
            mouse_capture: true,
        }
    }
}

impl Config {
    /// Load the config from its default location, falling back to defaults
    /// when it is missing or unreadable.
    #[must_use]
    pub fn load() -> Self {
        paths::config_path().map_or_else(
            || {
                debug!("No config location available, using defaults");
                Self::default()
            },
            |path| Self::load_from(&path),
        )
    }

    /// Load the config from `path`, falling back to defaults when it is
    /// missing or unreadable.
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            debug!("Config file not found at {:?}, using defaults", path);
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(config) => {
                    debug!("Loaded config from {:?}", path);
                    config
                }
                Err(e) => {
                    warn!("Failed to parse config file {:?}: {}", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read config file {:?}: {}", path, e);
                Self::default()
            }
        }
    }
}
