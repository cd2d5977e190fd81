//! Error types for backend operations.

use thiserror::Error;

/// Errors that can occur while talking to a completion backend.
#[derive(Debug, Error)]
pub enum BrainError {
    /// The backend is not configured correctly (missing URL, bad client setup).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered, but not with something usable.
    #[error("processing failed: {0}")]
    ProcessingFailed(String),

    /// The backend is temporarily unavailable.
    #[error("brain unavailable: {0}")]
    Unavailable(String),

    /// A timeout occurred during processing.
    #[error("processing timed out")]
    Timeout,
}
