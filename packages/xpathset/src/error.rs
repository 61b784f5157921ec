//! Error types for path extraction.
//!
//! Input errors (I/O, malformed XML) are wrapped unmodified so the caller
//! sees the parser's own diagnostics. `UnsupportedOperation` is the refusal
//! returned by every mutating method of a frozen [`PathSet`](crate::PathSet).

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the xpathset library.
#[derive(Debug, Error)]
pub enum XpathError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// Input bytes are not valid UTF-8.
    #[error("Input is not valid UTF-8: {source}")]
    InvalidUtf8 {
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Input exceeds the configured size limit.
    #[error("Input too large: {size} bytes exceeds limit of {limit} bytes")]
    InputTooLarge { size: u64, limit: u64 },

    /// Path given on the command line is not a readable regular file.
    #[error("Not a file: {}", .0.display())]
    NotAFile(PathBuf),

    /// Attempt to mutate an immutable path set.
    #[error("Unsupported operation: {operation} on an immutable path set")]
    UnsupportedOperation { operation: &'static str },
}

impl XpathError {
    /// Whether this error is the refusal of a mutating operation.
    #[must_use]
    pub fn is_unsupported_operation(&self) -> bool {
        matches!(self, Self::UnsupportedOperation { .. })
    }
}

/// Result type alias for xpathset operations.
pub type Result<T> = std::result::Result<T, XpathError>;
