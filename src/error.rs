//! Error types for the notice library

use std::path::PathBuf;

/// Errors produced while describing or loading a dialog.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Text did not name one of the four modal kinds.
    #[error("unknown modal kind `{0}` (expected one of: success, error, warning, info)")]
    UnknownKind(String),

    /// A dialog spec file could not be read.
    #[error("failed to read dialog spec {}: {source}", path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// A dialog spec file was not valid JSON for a dialog.
    #[error("failed to parse dialog spec {}: {source}", path.display())]
    Parse {
        /// File that was being parsed.
        path: PathBuf,
        /// Underlying parse failure.
        source: serde_json::Error,
    },
}

/// Result alias for fallible library operations.
pub type Result<T> = std::result::Result<T, Error>;
