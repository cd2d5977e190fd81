//! Block height and block-by-number adapters.

use futures::future::join_all;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::log_swallowed;
use crate::error::ExplorerError;
use crate::explorer::Explorer;
use crate::network::Network;
use crate::units::{group_thousands, hex_quantity_to_decimal, hex_quantity_to_u64};

/// Live block height of one network.
///
/// `block_height` is 0 when `error` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeight {
    pub name: String,
    pub block_height: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BlockHeight {
    fn from_result(network: &Network, result: Result<u64, ExplorerError>) -> Self {
        match result {
            Ok(height) => Self {
                name: network.display_name.clone(),
                block_height: height,
                error: None,
            },
            Err(e) => {
                log_swallowed("block number", &network.id, &e);
                let reason = match e {
                    ExplorerError::HttpStatus(_) => "Network unavailable",
                    ExplorerError::Transport(_) => "Fetch error",
                    _ => "Invalid response",
                };
                Self {
                    name: network.display_name.clone(),
                    block_height: 0,
                    error: Some(reason.to_string()),
                }
            }
        }
    }
}

/// Format a height panel.
pub fn format_block_heights(heights: &[BlockHeight]) -> String {
    let lines: Vec<String> = heights
        .iter()
        .map(|h| match h.error {
            Some(ref reason) => format!("**{}:** Error - {}", h.name, reason),
            None => format!(
                "**{}:** Block {}",
                h.name,
                group_thousands(&h.block_height.to_string())
            ),
        })
        .collect();
    format!(
        "**Live Block Heights:**\n{}\n\n*Block heights update every ~12 seconds*",
        lines.join("\n")
    )
}

/// A block returned by `proxy/eth_getBlockByNumber`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockInfo {
    pub number: String,
    pub gas_used: String,
    #[serde(default)]
    pub transactions: Vec<Value>,
}

/// Format block info with decimal, grouped quantities.
pub fn format_block_info(block: &BlockInfo) -> Option<String> {
    let number = hex_quantity_to_decimal(&block.number)?;
    let gas_used = hex_quantity_to_decimal(&block.gas_used)?;
    Some(format!(
        "**Block Info:**\n• Number: {}\n• Transactions: {}\n• Gas Used: {}",
        group_thousands(&number),
        block.transactions.len(),
        group_thousands(&gas_used)
    ))
}

impl Explorer {
    /// `proxy/eth_blockNumber`.
    pub async fn fetch_block_number(&self, network: &Network) -> Result<u64, ExplorerError> {
        let hex: String = self
            .client
            .call_as(network, "proxy", "eth_blockNumber", &[])
            .await?;
        hex_quantity_to_u64(&hex)
            .ok_or_else(|| ExplorerError::Shape(format!("block number {:?}", hex)))
    }

    /// Live height of one network.
    pub async fn block_height(&self, network: &Network) -> BlockHeight {
        BlockHeight::from_result(network, self.fetch_block_number(network).await)
    }

    /// Live heights of every network, concurrently, in registry order.
    pub async fn block_heights(&self) -> Vec<BlockHeight> {
        join_all(self.registry.iter().map(|network| self.block_height(network))).await
    }

    /// Height panel text for every network.
    pub async fn block_heights_text(&self) -> String {
        format_block_heights(&self.block_heights().await)
    }

    /// `proxy/eth_getBlockByNumber` with full transactions.
    pub async fn fetch_block_by_number(
        &self,
        network: &Network,
        tag: &str,
    ) -> Result<BlockInfo, ExplorerError> {
        self.client
            .call_as(
                network,
                "proxy",
                "eth_getBlockByNumber",
                &[("tag", tag), ("boolean", "true")],
            )
            .await
    }

    /// Latest mainnet block summary, or empty.
    pub async fn latest_block_text(&self) -> String {
        let mainnet = self.registry.mainnet();
        let block = match self.fetch_block_by_number(mainnet, "latest").await {
            Ok(block) => block,
            Err(e) => {
                log_swallowed("block by number", &mainnet.id, &e);
                return String::new();
            }
        };
        format_block_info(&block).unwrap_or_default()
    }
}
