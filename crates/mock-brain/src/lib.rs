//! Mock brain implementations for testing.
//!
//! This crate provides mock implementations of the `Brain` trait:
//! - `ScriptedBrain` - Plays back canned replies and records every request
//! - `FailingBrain` - Always errors (or panics)
//!
//! For production use, see the `relay-brain` crate.
//!
//! # Example
//!
//! ```rust
//! use mock_brain::{Brain, ChatMessage, CompletionRequest, ScriptedBrain};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mock_brain::BrainError> {
//!     let brain = ScriptedBrain::answering("Gas is low.");
//!
//!     let request = CompletionRequest::new(vec![ChatMessage::user("Hello!")]);
//!
//!     let reply = brain.complete(request).await?;
//!     println!("Reply: {:?}", reply.text());
//!     assert_eq!(brain.call_count(), 1);
//!     Ok(())
//! }
//! ```

mod failing;
mod scripted;

// Re-export brain-core types for convenience
pub use brain_core::{
    async_trait, Brain, BrainError, ChatMessage, CompletionRequest, ModelReply, Role,
};

pub use failing::FailingBrain;
pub use scripted::ScriptedBrain;
