//! Transaction adapters: receipt status, lookup by hash, account nonce.

use std::fmt;

use serde::Deserialize;

use super::{log_swallowed, UNKNOWN};
use crate::error::ExplorerError;
use crate::explorer::Explorer;
use crate::network::Network;
use crate::units::{group_thousands, hex_quantity_to_decimal};

/// Outcome reported by `transaction/gettxreceiptstatus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiptStatus {
    Successful,
    Failed,
    Unknown,
}

impl fmt::Display for ReceiptStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Successful => write!(f, "Successful"),
            Self::Failed => write!(f, "Failed"),
            Self::Unknown => write!(f, "{}", UNKNOWN),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawReceiptStatus {
    #[serde(default)]
    status: String,
}

/// A transaction returned by `proxy/eth_getTransactionByHash`.
///
/// Quantities are JSON-RPC hex strings. Block fields are null while pending;
/// `to` is null for contract creation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionInfo {
    pub hash: String,
    pub block_number: Option<String>,
    pub block_hash: Option<String>,
    pub from: String,
    pub to: Option<String>,
    pub value: String,
    pub gas: String,
    pub gas_price: Option<String>,
    pub nonce: String,
}

/// A receipt returned by `proxy/eth_getTransactionReceipt`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    pub gas_used: String,
    #[serde(default)]
    pub status: Option<String>,
}

impl TransactionReceipt {
    /// Whether the receipt reports success (`0x1`).
    pub fn succeeded(&self) -> bool {
        self.status.as_deref() == Some("0x1")
    }
}

impl Explorer {
    /// `transaction/gettxreceiptstatus`.
    pub async fn fetch_receipt_status(
        &self,
        network: &Network,
        hash: &str,
    ) -> Result<ReceiptStatus, ExplorerError> {
        let raw: RawReceiptStatus = self
            .client
            .call_as(network, "transaction", "gettxreceiptstatus", &[("txhash", hash)])
            .await?;
        Ok(match raw.status.as_str() {
            "1" => ReceiptStatus::Successful,
            "0" => ReceiptStatus::Failed,
            _ => ReceiptStatus::Unknown,
        })
    }

    /// Mainnet receipt status; `Unknown` on any failure.
    pub async fn receipt_status(&self, hash: &str) -> ReceiptStatus {
        let mainnet = self.registry.mainnet();
        match self.fetch_receipt_status(mainnet, hash).await {
            Ok(status) => status,
            Err(e) => {
                log_swallowed("receipt status", &mainnet.id, &e);
                ReceiptStatus::Unknown
            }
        }
    }

    /// `proxy/eth_getTransactionByHash`. A null result means "not on this network".
    pub async fn fetch_transaction(
        &self,
        network: &Network,
        hash: &str,
    ) -> Result<TransactionInfo, ExplorerError> {
        self.client
            .call_as(network, "proxy", "eth_getTransactionByHash", &[("txhash", hash)])
            .await
    }

    /// `proxy/eth_getTransactionReceipt`.
    pub async fn fetch_transaction_receipt(
        &self,
        network: &Network,
        hash: &str,
    ) -> Result<TransactionReceipt, ExplorerError> {
        self.client
            .call_as(network, "proxy", "eth_getTransactionReceipt", &[("txhash", hash)])
            .await
    }

    /// `proxy/eth_getTransactionCount` as a decimal string.
    pub async fn fetch_transaction_count(
        &self,
        network: &Network,
        address: &str,
    ) -> Result<String, ExplorerError> {
        let hex: String = self
            .client
            .call_as(
                network,
                "proxy",
                "eth_getTransactionCount",
                &[("address", address), ("tag", "latest")],
            )
            .await?;
        hex_quantity_to_decimal(&hex)
            .ok_or_else(|| ExplorerError::Shape(format!("transaction count {:?}", hex)))
    }

    /// Mainnet transaction count with thousands separators, or `Unknown`.
    pub async fn transaction_count_text(&self, address: &str) -> String {
        let mainnet = self.registry.mainnet();
        match self.fetch_transaction_count(mainnet, address).await {
            Ok(count) => group_thousands(&count),
            Err(e) => {
                log_swallowed("transaction count", &mainnet.id, &e);
                UNKNOWN.to_string()
            }
        }
    }
}
