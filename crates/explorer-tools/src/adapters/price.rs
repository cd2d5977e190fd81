//! ETH spot price adapter.

use serde::Deserialize;

use super::{log_swallowed, Sentinels};
use crate::error::ExplorerError;
use crate::explorer::Explorer;
use crate::network::Network;

const SENTINELS: Sentinels = Sentinels {
    http_status: "Unable to fetch ETH price",
    envelope: "ETH price data unavailable",
    transport: "Error fetching ETH price data",
};

#[derive(Debug, Deserialize)]
struct RawEthPrice {
    ethusd: String,
    ethbtc: String,
}

/// ETH spot price in USD and BTC.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EthPrice {
    pub usd: f64,
    pub btc: f64,
}

impl TryFrom<RawEthPrice> for EthPrice {
    type Error = ExplorerError;

    fn try_from(raw: RawEthPrice) -> Result<Self, Self::Error> {
        let parse = |field: &str, value: &str| {
            value
                .trim()
                .parse::<f64>()
                .map_err(|_| ExplorerError::Shape(format!("{} is not a number: {:?}", field, value)))
        };
        Ok(Self {
            usd: parse("ethusd", &raw.ethusd)?,
            btc: parse("ethbtc", &raw.ethbtc)?,
        })
    }
}

/// Format a spot price.
pub fn format_eth_price(price: &EthPrice) -> String {
    format!(
        "**Current Ethereum Price:**\n• USD: ${:.2}\n• BTC: ₿{:.6}",
        price.usd, price.btc
    )
}

impl Explorer {
    /// `stats/ethprice` on `network`.
    pub async fn fetch_eth_price(&self, network: &Network) -> Result<EthPrice, ExplorerError> {
        let raw: RawEthPrice = self
            .client
            .call_as(network, "stats", "ethprice", &[])
            .await?;
        EthPrice::try_from(raw)
    }

    /// Current ETH price, or a sentinel.
    pub async fn eth_price_text(&self) -> String {
        let mainnet = self.registry.mainnet();
        match self.fetch_eth_price(mainnet).await {
            Ok(price) => format_eth_price(&price),
            Err(e) => {
                log_swallowed("eth price", &mainnet.id, &e);
                SENTINELS.pick(&e).to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_eth_price() {
        let price = EthPrice {
            usd: 3456.789,
            btc: 0.0523456789,
        };
        assert_eq!(
            format_eth_price(&price),
            "**Current Ethereum Price:**\n• USD: $3456.79\n• BTC: ₿0.052346"
        );
    }

    #[test]
    fn test_non_numeric_price_is_shape_error() {
        let raw = RawEthPrice {
            ethusd: "n/a".to_string(),
            ethbtc: "0.05".to_string(),
        };
        assert!(matches!(EthPrice::try_from(raw), Err(ExplorerError::Shape(_))));
    }
}
