//! Error types for the cheat sheet viewer.
//!
//! This module defines the centralized error type [`ViewerError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Only the load-related variants ([`ViewerError::Io`], [`ViewerError::Parse`] and
//! [`ViewerError::Discovery`]) ever reach the view state machine; they are reported
//! as [`ErrorInfo`] through a `LoadFailed` response. The remaining variants can only
//! occur while the program is starting up.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for cheat sheet viewer operations.
///
/// Load variants carry the path that failed so the error screen can tell the user
/// which sheet or directory is at fault.
///
/// # Examples
///
/// ```
/// use cheatsheet_viewer::ViewerError;
///
/// fn pick_theme() -> Result<(), ViewerError> {
///     Err(ViewerError::Theme("unknown theme 'neon'".to_string()))
/// }
/// assert!(pick_theme().is_err());
/// ```
#[derive(Debug, Error)]
pub enum ViewerError {
    /// A sheet file or the catalog directory could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path that could not be read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A sheet file was read but is not a valid cheat sheet document.
    #[error("malformed cheat sheet {}: {source}", path.display())]
    Parse {
        /// Path of the malformed sheet.
        path: PathBuf,
        /// YAML decoding failure.
        #[source]
        source: serde_yaml::Error,
    },

    /// Walking the catalog directory failed part way through.
    #[error("failed to scan {}: {source}", path.display())]
    Discovery {
        /// Root of the directory walk.
        path: PathBuf,
        /// Directory walk failure.
        #[source]
        source: walkdir::Error,
    },

    /// Theme lookup or parsing failed.
    #[error("theme error: {0}")]
    Theme(String),

    /// The terminal could not be prepared or written to.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// A specialized `Result` type for viewer operations.
pub type Result<T> = std::result::Result<T, ViewerError>;

/// Display-ready description of a failed load.
///
/// Stored in the view state once a load fails. While it is set the state is
/// frozen and only the quit key is honoured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    /// Human-readable message shown on the error screen.
    pub message: String,
}

impl From<&ViewerError> for ErrorInfo {
    fn from(err: &ViewerError) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_message_names_the_path() {
        let err = ViewerError::Io {
            path: PathBuf::from("sheets/git.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let info = ErrorInfo::from(&err);
        assert!(info.message.contains("sheets/git.yaml"));
        assert!(info.message.contains("no such file"));
    }
}
