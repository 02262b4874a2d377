//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or processing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The path cannot be combined with the base origin into a valid URL.
    #[error("invalid request path: {0}")]
    InvalidPath(String),

    /// The HTTP method is not supported by the backend.
    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    /// The request body could not be serialized.
    #[error("invalid body: {0}")]
    InvalidBody(String),

    /// A file exceeds the upload size limit.
    #[error("file exceeds the upload limit ({size} > {max} bytes)")]
    OversizedUpload {
        /// Actual file size in bytes.
        size: usize,
        /// Maximum allowed size in bytes.
        max: usize,
    },

    /// A file has a content type the backend does not accept.
    #[error("unsupported file type: {0}")]
    UnsupportedFileType(String),

    /// A date string could not be parsed.
    #[error("invalid date: {0}")]
    InvalidDate(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
