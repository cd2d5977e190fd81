//! Block-explorer data adapters for the chain assistant.
//!
//! This crate provides everything that talks to, or interprets data from, an
//! Etherscan-style explorer API:
//!
//! - [`extract`] - Pull a transaction hash or account address out of free text.
//! - [`units`] - Wei/gwei conversion and number formatting over `U256` quantities.
//! - [`NetworkRegistry`] - Ordered set of supported networks; the first is mainnet.
//! - [`ExplorerClient`] - `module`/`action` GET client with envelope validation.
//! - [`Explorer`] - The adapters, each as a typed `fetch_*` plus a text form
//!   that never fails.
//! - [`RiskClient`] - Optional third-party wallet-risk lookup.
//!
//! # Example
//!
//! ```rust,ignore
//! use explorer_tools::Explorer;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), explorer_tools::ExplorerError> {
//!     let explorer = Explorer::from_env()?;
//!
//!     println!("{}", explorer.gas_price_text().await);
//!     println!("{}", explorer.block_heights_text().await);
//!     Ok(())
//! }
//! ```

pub mod adapters;
mod client;
mod config;
mod error;
mod explorer;
pub mod extract;
mod network;
mod risk;
pub mod units;

pub use adapters::account::{NetworkBalance, TokenTransfer, TxSummary};
pub use adapters::block::{BlockHeight, BlockInfo};
pub use adapters::contract::ContractSource;
pub use adapters::gas::GasOracle;
pub use adapters::price::EthPrice;
pub use adapters::transaction::{ReceiptStatus, TransactionInfo, TransactionReceipt};
pub use adapters::{UNKNOWN, ZERO_BALANCE};
pub use client::ExplorerClient;
pub use config::{ExplorerConfig, ExplorerConfigBuilder, RiskConfig, DEFAULT_TIMEOUT_SECS};
pub use error::ExplorerError;
pub use explorer::Explorer;
pub use extract::{extract_address, extract_hash};
pub use network::{Network, NetworkRegistry};
pub use risk::{RiskClient, WalletRisk};
