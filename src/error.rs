//! Lemmatch Error Types
//!
//! Centralized error handling for the library. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Central error type for Lemmatch
#[derive(Error, Debug)]
pub enum LemmatchError {
    #[error("lemma dictionary not found at {}", .0.display())]
    DictionaryMissing(PathBuf),

    #[error("malformed lemma dictionary entry at line {line}: {reason}")]
    DictionaryFormat { line: usize, reason: String },

    #[error("analyzer error: {0}")]
    Analyzer(String),

    #[error("malformed input: {0}")]
    Input(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Lemmatch operations
pub type LemmatchResult<T> = Result<T, LemmatchError>;

impl LemmatchError {
    /// Convert an I/O error raised while reading text, treating bad UTF-8 as malformed input
    pub(crate) fn from_read(err: std::io::Error, what: &str) -> Self {
        if err.kind() == std::io::ErrorKind::InvalidData {
            LemmatchError::Input(format!("{what} is not valid UTF-8"))
        } else {
            LemmatchError::Io(err)
        }
    }
}
