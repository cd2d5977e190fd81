//! HTTP relay brain implementation.
//!
//! This crate provides a [`Brain`] that forwards a conversation to a hosted
//! chat-completion relay and maps its answer onto [`ModelReply`].
//!
//! # Wire format
//!
//! ```text
//! POST {RELAY_API_URL}
//! Authorization: Bearer {api key}
//! {"messages": [{"role": "user", "content": "..."}]}
//!
//! 200 OK
//! {"content": "...", "action": "fetch_from_api"?}
//! ```
//!
//! Any non-2xx status is an error. The relay may ask the caller to show raw
//! data instead of its own phrasing, which surfaces as
//! [`ModelReply::PreferData`].
//!
//! # Usage
//!
//! ```rust,no_run
//! use relay_brain::{Brain, ChatMessage, CompletionRequest, RelayBrain};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let brain = RelayBrain::from_env()?;
//!     let reply = brain
//!         .complete(CompletionRequest::new(vec![ChatMessage::user("What is a nonce?")]))
//!         .await?;
//!     println!("{:?}", reply);
//!     Ok(())
//! }
//! ```

mod api_types;
mod brain;
mod config;

pub use brain::RelayBrain;
pub use config::RelayBrainConfig;

// Re-export brain-core types for convenience
pub use brain_core::{
    async_trait, Brain, BrainError, ChatMessage, CompletionRequest, ModelReply, Role,
};
