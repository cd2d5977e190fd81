//! Network statistics adapter.

use super::log_swallowed;
use crate::error::ExplorerError;
use crate::explorer::Explorer;
use crate::network::Network;
use crate::units::{base_units_to_major, group_thousands, trim_fraction_zeros, ETHER_DECIMALS};

/// Format total supply (in wei) as grouped ether with up to 3 decimals.
pub fn format_supply(wei: &str) -> Option<String> {
    let ether = base_units_to_major(wei, ETHER_DECIMALS, 3)?;
    Some(group_thousands(trim_fraction_zeros(&ether)))
}

impl Explorer {
    /// `stats/ethsupply` in wei.
    pub async fn fetch_eth_supply(&self, network: &Network) -> Result<String, ExplorerError> {
        self.client
            .call_as(network, "stats", "ethsupply", &[])
            .await
    }

    /// Network statistics block for mainnet.
    ///
    /// Supply and gas oracle are fetched concurrently; each line is omitted
    /// when its source fails, leaving only the header.
    pub async fn network_stats_text(&self) -> String {
        let mainnet = self.registry.mainnet();
        let (supply, gas) = futures::join!(
            self.fetch_eth_supply(mainnet),
            self.fetch_gas_oracle(mainnet)
        );

        let mut text = String::from("**Network Statistics:**");

        match supply.map(|wei| format_supply(&wei)) {
            Ok(Some(supply)) => text.push_str(&format!(
                "\n• Total {} Supply: {} {}",
                mainnet.currency_symbol, supply, mainnet.currency_symbol
            )),
            Ok(None) => log_swallowed(
                "eth supply",
                &mainnet.id,
                &ExplorerError::Shape("supply is not a decimal integer".to_string()),
            ),
            Err(e) => log_swallowed("eth supply", &mainnet.id, &e),
        }

        match gas {
            Ok(oracle) => text.push_str(&format!(
                "\n• Current Gas: {} Gwei (Safe)",
                oracle.safe_gas_price
            )),
            Err(e) => log_swallowed("gas oracle", &mainnet.id, &e),
        }

        text
    }
}
