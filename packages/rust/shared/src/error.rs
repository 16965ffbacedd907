//! Error types for tocify.
//!
//! Library crates use [`TocifyError`] via `thiserror`.
//! App crates (cli/server) wrap this with `color-eyre` or map it onto
//! HTTP responses.

use std::path::PathBuf;

/// Top-level error type for all tocify operations.
#[derive(Debug, thiserror::Error)]
pub enum TocifyError {
    /// Configuration loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// The input line sequence handed to the parser is absent.
    /// An empty-but-present sequence is not an error.
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// Uploaded or read bytes could not be decoded into text.
    #[error("decode error: {0}")]
    Decode(String),

    /// Filesystem I/O error.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, TocifyError>;

impl TocifyError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Create an invalid-input error from any displayable message.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: msg.into(),
        }
    }

    /// Create a decode error from any displayable message.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
