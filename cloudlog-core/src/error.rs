//! Typed error handling for cloudlog.
//!
//! Emission never fails from the caller's point of view; these errors only
//! come out of configuration, level parsing, and process-wide initialization.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for cloudlog operations.
#[derive(Error, Debug)]
pub enum CloudlogError {
    /// A level or severity string that matches no known name or code
    #[error("invalid log level ({value})")]
    InvalidLevel { value: String },

    /// I/O error when reading a configuration file
    #[error("I/O error at {path}: {message}")]
    Io {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Malformed configuration file
    #[error("Config error at {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// The process-wide logger was already installed
    #[error("global logger already initialized")]
    AlreadyInitialized,
}

impl CloudlogError {
    /// Create an invalid level error for the given raw value.
    pub fn invalid_level(value: impl Into<String>) -> Self {
        Self::InvalidLevel {
            value: value.into(),
        }
    }

    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
            source: Some(err),
        }
    }

    /// Create a config error.
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Whether a caller can carry on with the INFO fallback.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidLevel { .. } | Self::AlreadyInitialized)
    }

    /// Get the path associated with this error, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Io { path, .. } => Some(path),
            Self::Config { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Convenience type alias for cloudlog results.
pub type CloudlogResult<T> = Result<T, CloudlogError>;

/// Extension trait for converting std::io::Error with path context.
pub trait IoResultExt<T> {
    /// Add path context to an I/O error.
    fn with_path(self, path: impl Into<PathBuf>) -> CloudlogResult<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> CloudlogResult<T> {
        self.map_err(|e| CloudlogError::io(path, e))
    }
}
