//! Question answering over blockchain explorer data.
//!
//! This crate provides the [`Orchestrator`] type, which turns a free-text
//! question into an answer using live explorer data, a model backend, or
//! canned text, in that order of preference.
//!
//! # Architecture
//!
//! ```text
//! Conversation (last user message)
//!          ↓
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      ORCHESTRATOR                           │
//! │                                                             │
//! │  1. Classify intent, extract hash / address                 │
//! │         ↓                                                   │
//! │  2. Intent handler (explorer-tools adapters)                │
//! │     • single adapters → gas, price, balance, status …       │
//! │     • cross-network scan → transaction details              │
//! │     • wallet aggregator → composite report                  │
//! │         ↓                                                   │
//! │  3. Data present → model analyzes it (or raw data)          │
//! │     No data     → model answers (or canned text)            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use brain_core::ChatMessage;
//! use orchestrator::Orchestrator;
//!
//! let orchestrator = Orchestrator::from_env().await?;
//! let reply = orchestrator
//!     .answer(&[ChatMessage::user("What's the current gas price?")])
//!     .await;
//! println!("{}", reply);
//! ```

pub mod classifier;
pub mod config;
pub mod credentials;
pub mod error;
pub mod fallback;
pub mod handler;
pub mod intent;
mod orchestrator;
pub mod report;
pub mod scan;
pub mod wallet;

pub use classifier::classify;
pub use config::{OrchestratorConfig, OrchestratorConfigBuilder};
pub use credentials::{
    CredentialStore, DatabaseSettings, MemorySettings, SettingsStorage, MODEL_API_KEY_SETTING,
};
pub use error::OrchestratorError;
pub use handler::IntentHandler;
pub use intent::{Classification, EntityKind, ExtractedEntity, IntentTag};
pub use orchestrator::{Orchestrator, ANALYZE_PROMPT_PREFIX, APOLOGY_RESPONSE};
pub use report::{SectionKind, WalletReport};
pub use scan::TransactionMatch;
