//! The Brain trait definition.

use async_trait::async_trait;

use crate::error::BrainError;
use crate::message::CompletionRequest;
use crate::reply::ModelReply;

/// A text-completion backend.
///
/// Implementations range from HTTP relays to scripted test doubles.
/// This trait is object-safe and can be used with `Box<dyn Brain>`.
#[async_trait]
pub trait Brain: Send + Sync {
    /// Complete a conversation.
    ///
    /// Returns an error when the backend could not be reached or its
    /// response could not be understood. Callers decide how to degrade.
    async fn complete(&self, request: CompletionRequest) -> Result<ModelReply, BrainError>;

    /// Get a human-readable name for this backend.
    fn name(&self) -> &str;

    /// Check if the backend is ready to take requests.
    ///
    /// Default implementation always returns true.
    async fn is_ready(&self) -> bool {
        true
    }
}
