//! Core trait and types for language-model backends.
//!
//! This crate provides the shared interface between the chain assistant's
//! orchestrator and whatever text-completion service answers free-form
//! questions. It defines:
//!
//! - [`Brain`] - The trait that all backend implementations must implement
//! - [`ChatMessage`] / [`Role`] - Conversation turns sent to the backend
//! - [`CompletionRequest`] - A conversation plus an optional per-call credential
//! - [`ModelReply`] - The backend's tri-state answer
//! - [`BrainError`] - Error types for backend operations
//!
//! # Example
//!
//! ```rust
//! use brain_core::{Brain, BrainError, CompletionRequest, ModelReply};
//! use async_trait::async_trait;
//!
//! struct HelloBrain;
//!
//! #[async_trait]
//! impl Brain for HelloBrain {
//!     async fn complete(&self, _request: CompletionRequest) -> Result<ModelReply, BrainError> {
//!         Ok(ModelReply::answer("Hello!"))
//!     }
//!
//!     fn name(&self) -> &str {
//!         "HelloBrain"
//!     }
//! }
//! ```

mod error;
mod message;
mod prompt;
mod reply;
mod trait_def;

pub use error::BrainError;
pub use message::{ChatMessage, CompletionRequest, Role};
pub use prompt::hash_prompt;
pub use reply::ModelReply;
pub use trait_def::Brain;

// Re-export async_trait for convenience
pub use async_trait::async_trait;
