//! Relay request and response types.

use brain_core::ChatMessage;
use serde::{Deserialize, Serialize};

/// Body posted to the relay.
#[derive(Debug, Clone, Serialize)]
pub struct RelayRequest<'a> {
    /// Messages in the conversation, oldest first.
    pub messages: &'a [ChatMessage],
}

/// Successful relay response.
#[derive(Debug, Clone, Deserialize)]
pub struct RelayResponse {
    /// Completion text (may be null or missing).
    #[serde(default)]
    pub content: Option<String>,
    /// Optional structured instruction for the caller.
    #[serde(default)]
    pub action: Option<String>,
}

/// Error body returned by the relay on failure.
///
/// Deployments disagree on the shape, so both the OpenAI-style object and a
/// bare string are accepted.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ApiError {
    /// `{"error": {"message": "..."}}`
    Detailed { error: ApiErrorDetails },
    /// `{"error": "..."}`
    Plain { error: String },
}

impl ApiError {
    /// The human-readable error message.
    pub fn message(&self) -> &str {
        match self {
            Self::Detailed { error } => &error.message,
            Self::Plain { error } => error,
        }
    }
}

/// API error details.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetails {
    /// Error message
    pub message: String,
    /// Error type
    #[serde(rename = "type")]
    pub error_type: Option<String>,
}
