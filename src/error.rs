//! Error handling for clipmd
//!
//! `ClipMdError` covers the failures that can end a run. Files that cannot be
//! read are not run-level failures; they surface as [`UnreadableFile`] values
//! that the collector records and skips.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::clipboard::ClipboardError;

/// Global error type for clipmd operations
#[derive(Error, Debug)]
pub enum ClipMdError {
    /// Clipboard delivery failed
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),

    /// Console or other IO errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Specialized Result type for clipmd operations
pub type Result<T> = std::result::Result<T, ClipMdError>;

/// A file that could not be read as UTF-8 text
///
/// Covers decoding, permission and any other IO failure while opening or
/// reading the file.
#[derive(Error, Debug)]
#[error("{}: {}", .path.display(), .source)]
pub struct UnreadableFile {
    /// Absolute path of the file
    pub path: PathBuf,
    /// Underlying failure
    #[source]
    pub source: io::Error,
}

impl UnreadableFile {
    pub fn new(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }

    /// Whether the file was readable but not valid UTF-8
    pub fn is_decoding_error(&self) -> bool {
        self.source.kind() == io::ErrorKind::InvalidData
    }
}
