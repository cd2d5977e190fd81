//! Error types for explorer calls.

use thiserror::Error;

/// Why an explorer call produced no usable payload.
///
/// Text adapters never surface these to the user; they log them and fall
/// back to their sentinel text.
#[derive(Debug, Error)]
pub enum ExplorerError {
    /// Request never produced a response (connect, timeout, body decode).
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response arrived with a non-2xx status.
    #[error("Explorer returned status {0}")]
    HttpStatus(u16),

    /// Envelope `status` was not `"1"`.
    #[error("Explorer status {status}: {message}")]
    StatusMismatch { status: String, message: String },

    /// Envelope had no `result`, or it was null.
    #[error("Explorer response had no result")]
    MissingResult,

    /// `result` could not be decoded into the expected payload.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// `result` decoded but its contents were unusable.
    #[error("Unexpected response shape: {0}")]
    Shape(String),

    /// Invalid client or registry configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ExplorerError {
    /// Whether the call failed before an HTTP status was received.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Whether the server answered with a non-2xx status.
    pub fn is_http_status(&self) -> bool {
        matches!(self, Self::HttpStatus(_))
    }
}
