//! Supported networks and their ordered registry.

use indexmap::IndexMap;
use tracing::info;

use crate::config::ExplorerConfig;

/// (id, display name, short name, base URL)
const DEFAULT_MAINNET: (&str, &str, &str, &str) = (
    "ethereum",
    "Ethereum Mainnet",
    "Mainnet",
    "https://api.etherscan.io/api",
);

const DEFAULT_TESTNETS: [(&str, &str, &str, &str); 2] = [
    ("sepolia", "Sepolia Testnet", "Sepolia", "https://api-sepolia.etherscan.io/api"),
    ("holesky", "Holesky Testnet", "Holesky", "https://api-holesky.etherscan.io/api"),
];

/// A blockchain deployment with its own explorer endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Network {
    /// Registry key, e.g. `ethereum`.
    pub id: String,
    /// Name shown to users, e.g. `Ethereum Mainnet`.
    pub display_name: String,
    /// Short name used in lists, e.g. `Mainnet`.
    pub short_name: String,
    /// Native currency symbol.
    pub currency_symbol: String,
    /// Explorer API base URL.
    pub base_api_url: String,
    /// Explorer API key.
    pub api_key: Option<String>,
}

impl Network {
    /// Create a network with no API key. The short name defaults to the display name.
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        currency_symbol: impl Into<String>,
        base_api_url: impl Into<String>,
    ) -> Self {
        let display_name = display_name.into();
        Self {
            id: id.into(),
            short_name: display_name.clone(),
            display_name,
            currency_symbol: currency_symbol.into(),
            base_api_url: base_api_url.into(),
            api_key: None,
        }
    }

    /// Set the short name.
    pub fn with_short_name(mut self, short_name: impl Into<String>) -> Self {
        self.short_name = short_name.into();
        self
    }

    /// Set the API key.
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }
}

/// Ordered map of supported networks.
///
/// Registration order is significant: scans visit networks in this order and
/// the first network registered is treated as mainnet. A registry always
/// holds at least one network.
#[derive(Debug, Clone)]
pub struct NetworkRegistry {
    networks: IndexMap<String, Network>,
}

impl NetworkRegistry {
    /// Create a registry whose mainnet is `mainnet`.
    pub fn new(mainnet: Network) -> Self {
        let mut networks = IndexMap::new();
        networks.insert(mainnet.id.clone(), mainnet);
        Self { networks }
    }

    /// Default registry (Ethereum Mainnet, Sepolia, Holesky) with overrides
    /// and API key from `config`.
    pub fn from_config(config: &ExplorerConfig) -> Self {
        let build = |(id, name, short, url): &(&str, &str, &str, &str)| {
            Network::new(*id, *name, "ETH", config.api_url_for(id, url))
                .with_short_name(*short)
                .with_api_key(config.api_key.clone())
        };

        let mut registry = Self::new(build(&DEFAULT_MAINNET));
        for testnet in &DEFAULT_TESTNETS {
            registry.register(build(testnet));
        }
        registry
    }

    /// Register a network.
    ///
    /// If a network with the same id already exists, it is replaced in place.
    pub fn register(&mut self, network: Network) {
        info!("Registering network: {} ({})", network.id, network.base_api_url);
        self.networks.insert(network.id.clone(), network);
    }

    /// Get a network by id.
    pub fn get(&self, id: &str) -> Option<&Network> {
        self.networks.get(id)
    }

    /// The first registered network.
    pub fn mainnet(&self) -> &Network {
        &self.networks[0]
    }

    /// Networks in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Network> {
        self.networks.values()
    }

    /// Number of registered networks.
    pub fn len(&self) -> usize {
        self.networks.len()
    }

    /// Whether the registry is empty. A constructed registry never is.
    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }

    /// Short names joined for user-facing lists, e.g. `Mainnet, Sepolia, Holesky`.
    pub fn short_names(&self) -> String {
        self.iter()
            .map(|n| n.short_name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for NetworkRegistry {
    fn default() -> Self {
        Self::from_config(&ExplorerConfig::default())
    }
}
