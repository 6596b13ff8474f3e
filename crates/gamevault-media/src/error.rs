//! # Media Error Types
//!
//! Error types for blob/file store operations.

use std::path::PathBuf;
use thiserror::Error;

/// Blob store operation errors.
#[derive(Debug, Error)]
pub enum MediaError {
    /// A relative path tried to escape the content root.
    #[error("Path escapes the content root: {path}")]
    PathOutsideRoot { path: String },

    /// The content root could not be created.
    #[error("Failed to prepare content root {root}: {source}")]
    RootUnavailable {
        root: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Underlying filesystem operation failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl MediaError {
    /// Wraps an I/O error with the relative path it occurred on.
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        MediaError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for blob store operations.
pub type MediaResult<T> = Result<T, MediaError>;
