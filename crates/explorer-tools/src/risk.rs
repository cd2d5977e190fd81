//! Third-party wallet-risk lookup.

use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::RiskConfig;
use crate::error::ExplorerError;

/// One wallet record from the risk service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct WalletRisk {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub risk_level: Option<String>,
}

/// The service answers with either a list of wallets or a single record.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WalletsResponse {
    Many(Vec<WalletRisk>),
    One(WalletRisk),
}

impl WalletsResponse {
    /// Pick the record for `address`; a single record is taken as-is.
    fn select(self, address: &str) -> Option<WalletRisk> {
        match self {
            Self::Many(wallets) => wallets.into_iter().find(|w| {
                w.address
                    .as_deref()
                    .is_some_and(|a| a.eq_ignore_ascii_case(address))
            }),
            Self::One(wallet) => Some(wallet),
        }
    }
}

/// Format risk insights for a wallet report.
pub fn format_wallet_risk(risk: &WalletRisk) -> String {
    format!(
        "**Enhanced Wallet Insights:**\n• {}\n• Status: {}\n• Risk Level: {}",
        risk.description
            .as_deref()
            .unwrap_or("Additional wallet analysis available"),
        risk.status.as_deref().unwrap_or("Active"),
        risk.risk_level.as_deref().unwrap_or("Standard")
    )
}

/// Client for `GET {api_url}/wallets` with a bearer credential.
#[derive(Debug, Clone)]
pub struct RiskClient {
    client: reqwest::Client,
    config: RiskConfig,
}

impl RiskClient {
    /// Create a client. `timeout` applies unless the config sets its own.
    pub fn new(config: RiskConfig, timeout: Duration) -> Result<Self, ExplorerError> {
        let client = reqwest::Client::builder()
            .user_agent("ChainAssistant/1.0")
            .timeout(config.timeout.unwrap_or(timeout))
            .build()
            .map_err(|e| ExplorerError::Configuration(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client, config })
    }

    /// A client that never calls out.
    pub fn disabled(client: reqwest::Client) -> Self {
        Self {
            client,
            config: RiskConfig::default(),
        }
    }

    /// Whether lookups are configured.
    pub fn is_enabled(&self) -> bool {
        self.config.is_enabled()
    }

    /// Look up `address`. Returns `Ok(None)` when disabled or not listed.
    pub async fn lookup(&self, address: &str) -> Result<Option<WalletRisk>, ExplorerError> {
        let (Some(base), Some(key)) = (&self.config.api_url, &self.config.api_key) else {
            return Ok(None);
        };

        let url = format!("{}/wallets", base.trim_end_matches('/'));
        debug!("Fetching wallet risk from: {}", url);

        let response = self.client.get(&url).bearer_auth(key).send().await?;

        if !response.status().is_success() {
            return Err(ExplorerError::HttpStatus(response.status().as_u16()));
        }

        let wallets: WalletsResponse = response.json().await?;
        Ok(wallets.select(address))
    }

    /// Risk insights for `address`, or empty.
    pub async fn insights_text(&self, address: &str) -> String {
        match self.lookup(address).await {
            Ok(Some(risk)) => format_wallet_risk(&risk),
            Ok(None) => String::new(),
            Err(e) => {
                warn!("Wallet risk lookup failed: {}", e);
                String::new()
            }
        }
    }
}
