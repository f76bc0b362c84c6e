//! Error types for loading, normalizing and saving a record document.
//!
//! Only [`NormalizeError::NotFound`] and [`NormalizeError::InvalidJson`] are
//! part of the operator contract and carry a dedicated exit status; every
//! other I/O fault is surfaced as-is for the caller to abort on.

use std::path::PathBuf;

/// `EX_DATAERR` from `sysexits.h`: the input file was not a valid document.
pub const EXIT_INVALID_JSON: u8 = 65;

/// `EX_NOINPUT` from `sysexits.h`: the input file does not exist.
pub const EXIT_NOT_FOUND: u8 = 66;

#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    #[error("file does not exist: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("invalid json in {}: {source}", path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl NormalizeError {
    /// Process exit status for errors the command line reports itself.
    /// `None` means the error is an unmodeled fault.
    pub fn exit_code(&self) -> Option<u8> {
        match self {
            NormalizeError::NotFound { .. } => Some(EXIT_NOT_FOUND),
            NormalizeError::InvalidJson { .. } => Some(EXIT_INVALID_JSON),
            NormalizeError::Io { .. } => None,
        }
    }
}

/// Errors raised while building a [`PatternSource`](crate::PatternSource)
/// from configuration.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("invalid id_pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("id_pattern {pattern:?} must contain a capture group for the video id")]
    MissingCaptureGroup { pattern: String },

    #[error("thumbnail_template {template:?} must contain an {{id}} placeholder")]
    MissingPlaceholder { template: String },
}
