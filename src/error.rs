//! Application-wide error types.
//!
//! Library modules return [`Error`] via [`Result`]; `main` and the CLI layer
//! wrap it in `anyhow` for the final report.
//!
//! Every variant aborts the run. A catalog search that nobody confirms is not
//! an error: it is logged and yields an empty summary instead.

use std::fmt;
use std::path::PathBuf;

use crate::enrichment::EnrichmentError;

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Tag fields that must be present before a file can be looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagField {
    Title,
    Artist,
}

impl fmt::Display for TagField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagField::Title => f.write_str("title"),
            TagField::Artist => f.write_str("artist"),
        }
    }
}

/// Top-level application error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// List file or list entry with the wrong suffix
    #[error("Invalid file extension '{found}' for {path}, please use *.{expected}")]
    InvalidExtension {
        path: PathBuf,
        found: String,
        expected: &'static str,
    },

    /// Required tag absent from the file's tag store
    #[error("'{field}' not found in metadata of {path}")]
    MissingField { path: PathBuf, field: TagField },

    /// Tag library failure while reading or saving
    #[error("Metadata error for {path}: {message}")]
    Metadata { path: PathBuf, message: String },

    /// Catalog lookup failure
    #[error("Enrichment error: {0}")]
    Enrichment(#[from] EnrichmentError),

    /// The picker returned an index outside the known options
    #[error("Prompt returned unexpected selection index {0}")]
    UnexpectedPromptResult(usize),

    /// The terminal picker itself failed (no TTY, interrupted, ...)
    #[error("Prompt failed: {0}")]
    Prompt(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Create a metadata error.
    pub fn metadata(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Metadata {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an invalid extension error from the offending path.
    ///
    /// The reported extension keeps its leading dot; a path without one
    /// reports an empty string.
    pub fn invalid_extension(path: impl Into<PathBuf>, expected: &'static str) -> Self {
        let path = path.into();
        let found = path
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default();
        Self::InvalidExtension {
            path,
            found,
            expected,
        }
    }

    /// Create a missing field error.
    pub fn missing_field(path: impl Into<PathBuf>, field: TagField) -> Self {
        Self::MissingField {
            path: path.into(),
            field,
        }
    }

    /// Add context to an error.
    pub fn context(self, ctx: impl Into<String>) -> Self {
        Self::WithContext {
            context: ctx.into(),
            source: Box::new(self),
        }
    }
}

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn with_context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Io(e).context(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_extension_names_suffix() {
        let err = Error::invalid_extension("/music/song.mp3", "flac");
        match &err {
            Error::InvalidExtension { found, expected, .. } => {
                assert_eq!(found, ".mp3");
                assert_eq!(*expected, "flac");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("*.flac"));
    }

    #[test]
    fn test_invalid_extension_without_suffix() {
        let err = Error::invalid_extension("/music/README", "flac");
        assert!(matches!(err, Error::InvalidExtension { ref found, .. } if found.is_empty()));
    }

    #[test]
    fn test_missing_field_display() {
        let err = Error::missing_field("/music/song.flac", TagField::Artist);
        let msg = err.to_string();
        assert!(msg.contains("'artist'"));
        assert!(msg.contains("song.flac"));
    }

    #[test]
    fn test_metadata_error() {
        let err = Error::metadata("/music/song.flac", "unsupported format");
        let msg = err.to_string();
        assert!(msg.contains("song.flac"));
        assert!(msg.contains("unsupported format"));
    }

    #[test]
    fn test_result_ext() {
        let result: std::result::Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        let with_ctx = result.with_context("reading list file");
        let msg = with_ctx.unwrap_err().to_string();
        assert!(msg.contains("reading list file"));
        assert!(msg.contains("gone"));
    }
}
