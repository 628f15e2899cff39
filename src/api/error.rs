//! Error types for bug tracker clients.

use thiserror::Error;

/// The error produced by bug tracker operations.
///
/// Every failure mode a tracker can hit (validation of local input,
/// transport failures, unparseable responses) collapses into this single
/// message-carrying value at the client boundary, so callers only ever
/// deal with one error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SonarError {
    message: String,
}

impl SonarError {
    /// Create an error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Create an error from an HTTP status code.
    ///
    /// Maps the well-known status classes to user-facing messages; the
    /// response body (if any) is carried as context.
    pub fn from_status(status: reqwest::StatusCode, context: &str) -> Self {
        let message = match status.as_u16() {
            401 => "Authentication failed: check your API token".to_string(),
            403 => "Permission denied: you don't have access to this resource".to_string(),
            404 => format!("Resource not found: {}", context),
            429 => "Rate limited: please wait before retrying".to_string(),
            500..=599 => format!("Server error: HTTP {}: {}", status, context),
            _ => format!("Unexpected HTTP {}: {}", status, context),
        };
        Self { message }
    }
}

impl From<reqwest::Error> for SonarError {
    fn from(err: reqwest::Error) -> Self {
        Self::new(format!("Network error: {}", err))
    }
}

/// Result type for bug tracker operations.
pub type Result<T> = std::result::Result<T, SonarError>;

/// Errors from constructing a file attachment.
///
/// Distinct from [`SonarError`]: attachment construction happens locally,
/// before any network involvement, and is surfaced synchronously to the
/// caller.
#[derive(Debug, Error)]
pub enum AttachmentError {
    /// No MIME type is registered for the file's extension.
    #[error("no MIME type known for file extension '{extension}'")]
    InvalidMimeType {
        /// The extension that failed to resolve.
        extension: String,
    },

    /// Reading the file from disk failed.
    #[error("failed to read attachment: {0}")]
    Io(#[from] std::io::Error),
}
