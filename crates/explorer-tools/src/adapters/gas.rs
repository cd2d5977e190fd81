//! Gas oracle adapter.

use serde::Deserialize;

use super::{log_swallowed, Sentinels};
use crate::error::ExplorerError;
use crate::explorer::Explorer;
use crate::network::Network;

const SENTINELS: Sentinels = Sentinels {
    http_status: "Unable to fetch current gas price",
    envelope: "Gas price data unavailable",
    transport: "Error fetching gas price data",
};

/// Gas oracle result, prices in gwei as reported.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GasOracle {
    pub safe_gas_price: String,
    pub propose_gas_price: String,
    pub fast_gas_price: String,
}

/// Format the three oracle tiers.
pub fn format_gas_oracle(oracle: &GasOracle) -> String {
    format!(
        "**Current Gas Prices:**\n• Safe: {} Gwei\n• Standard: {} Gwei\n• Fast: {} Gwei",
        oracle.safe_gas_price, oracle.propose_gas_price, oracle.fast_gas_price
    )
}

impl Explorer {
    /// `gastracker/gasoracle` on `network`.
    pub async fn fetch_gas_oracle(&self, network: &Network) -> Result<GasOracle, ExplorerError> {
        self.client
            .call_as(network, "gastracker", "gasoracle", &[])
            .await
    }

    /// Current mainnet gas prices, or a sentinel.
    pub async fn gas_price_text(&self) -> String {
        let mainnet = self.registry.mainnet();
        match self.fetch_gas_oracle(mainnet).await {
            Ok(oracle) => format_gas_oracle(&oracle),
            Err(e) => {
                log_swallowed("gas oracle", &mainnet.id, &e);
                SENTINELS.pick(&e).to_string()
            }
        }
    }
}
