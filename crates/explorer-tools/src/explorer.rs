//! The adapter set: one client, one registry, optional risk lookup.

use crate::client::ExplorerClient;
use crate::config::{ExplorerConfig, RiskConfig};
use crate::error::ExplorerError;
use crate::network::NetworkRegistry;
use crate::risk::RiskClient;

/// Block-explorer data adapters over a fixed set of networks.
///
/// Each adapter comes in two forms: a typed `fetch_*` returning
/// `Result<Payload, ExplorerError>`, and a text form that formats the payload
/// or returns the adapter's sentinel. Text adapters never fail.
#[derive(Debug, Clone)]
pub struct Explorer {
    pub(crate) client: ExplorerClient,
    pub(crate) registry: NetworkRegistry,
    pub(crate) risk: RiskClient,
}

impl Explorer {
    /// Create an explorer over `registry` with risk lookup disabled.
    pub fn new(registry: NetworkRegistry, client: ExplorerClient) -> Self {
        Self {
            risk: RiskClient::disabled(client.http().clone()),
            client,
            registry,
        }
    }

    /// Attach a risk-lookup client.
    pub fn with_risk(mut self, risk: RiskClient) -> Self {
        self.risk = risk;
        self
    }

    /// Build from explicit configuration.
    pub fn from_config(config: &ExplorerConfig, risk: RiskConfig) -> Result<Self, ExplorerError> {
        let client = ExplorerClient::new(config.timeout)?;
        let registry = NetworkRegistry::from_config(config);
        let risk = RiskClient::new(risk, config.timeout)?;
        Ok(Self::new(registry, client).with_risk(risk))
    }

    /// Build from environment variables.
    ///
    /// See [`ExplorerConfig::from_env`] and [`RiskConfig::from_env`].
    pub fn from_env() -> Result<Self, ExplorerError> {
        Self::from_config(&ExplorerConfig::from_env(), RiskConfig::from_env())
    }

    /// The network registry.
    pub fn registry(&self) -> &NetworkRegistry {
        &self.registry
    }

    /// The explorer client.
    pub fn client(&self) -> &ExplorerClient {
        &self.client
    }

    /// The risk-lookup client.
    pub fn risk(&self) -> &RiskClient {
        &self.risk
    }
}
