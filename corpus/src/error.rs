//! Error types for corpus operations.
//!
//! Covers every failure mode of reading word files and writing the word
//! list: I/O (with the offending path), JSON serialization, exclude-pattern
//! compilation, and missing command arguments.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while building a word list.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// File or directory I/O failure.
    #[error("I/O error on {}: {source}", path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization failure.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The combined exclude pattern failed to compile.
    #[error("invalid exclude pattern: {0}")]
    PatternError(#[from] regex::Error),

    /// A required command argument is absent or empty.
    #[error("{0}")]
    MissingArgument(&'static str),
}

impl CorpusError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Convenience alias for results with [`CorpusError`].
pub type Result<T> = std::result::Result<T, CorpusError>;
