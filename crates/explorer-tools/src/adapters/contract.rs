//! Contract metadata and token supply adapters.

use serde::Deserialize;

use super::log_swallowed;
use crate::error::ExplorerError;
use crate::explorer::Explorer;
use crate::network::Network;
use crate::units::group_thousands;

/// One entry of `contract/getsourcecode`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ContractSource {
    pub source_code: String,
    pub contract_name: String,
    pub compiler_version: String,
    pub optimization_used: String,
}

impl ContractSource {
    /// Whether verified source is published.
    pub fn is_verified(&self) -> bool {
        !self.source_code.is_empty()
    }
}

fn or_unknown(value: &str) -> &str {
    if value.is_empty() {
        "Unknown"
    } else {
        value
    }
}

/// Format verified contract metadata.
pub fn format_contract_info(source: &ContractSource) -> String {
    format!(
        "**Contract Info:**\n• Name: {}\n• Compiler: {}\n• Verified: Yes\n• Optimization: {}",
        or_unknown(&source.contract_name),
        or_unknown(&source.compiler_version),
        if source.optimization_used == "1" {
            "Enabled"
        } else {
            "Disabled"
        }
    )
}

impl Explorer {
    /// `contract/getsourcecode`, first entry.
    pub async fn fetch_contract_source(
        &self,
        network: &Network,
        address: &str,
    ) -> Result<ContractSource, ExplorerError> {
        let entries: Vec<ContractSource> = self
            .client
            .call_as(network, "contract", "getsourcecode", &[("address", address)])
            .await?;
        entries.into_iter().next().ok_or(ExplorerError::MissingResult)
    }

    /// Mainnet verified-contract summary, or empty when unverified or unavailable.
    pub async fn contract_info_text(&self, address: &str) -> String {
        let mainnet = self.registry.mainnet();
        match self.fetch_contract_source(mainnet, address).await {
            Ok(source) if source.is_verified() => format_contract_info(&source),
            Ok(_) => String::new(),
            Err(e) => {
                log_swallowed("contract source", &mainnet.id, &e);
                String::new()
            }
        }
    }

    /// `stats/tokensupply` in the token's base units.
    pub async fn fetch_token_supply(
        &self,
        network: &Network,
        contract_address: &str,
    ) -> Result<String, ExplorerError> {
        let supply: String = self
            .client
            .call_as(
                network,
                "stats",
                "tokensupply",
                &[("contractaddress", contract_address)],
            )
            .await?;
        if supply.is_empty() || !supply.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ExplorerError::Shape(format!("token supply {:?}", supply)));
        }
        Ok(supply)
    }

    /// Mainnet token supply line, or empty.
    pub async fn token_supply_text(&self, contract_address: &str) -> String {
        let mainnet = self.registry.mainnet();
        match self.fetch_token_supply(mainnet, contract_address).await {
            Ok(supply) => format!("**Token Supply:** {} tokens", group_thousands(&supply)),
            Err(e) => {
                log_swallowed("token supply", &mainnet.id, &e);
                String::new()
            }
        }
    }
}
