//! Unified error types for transcriptor.
//!
//! The parse path itself is infallible: malformed transcripts degrade to a
//! (possibly empty) message list rather than erroring. Errors only exist at
//! the I/O edges of the crate — reading a transcript file and writing
//! serialized output.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for transcriptor operations.
///
/// # Example
///
/// ```rust
/// use transcriptor::error::Result;
/// use transcriptor::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     // ... operations that may fail
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, TranscriptError>;

/// The error type for all fallible transcriptor operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TranscriptError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error when producing output.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TranscriptError {
    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, TranscriptError::Io(_))
    }
}
