//! Configuration for explorer and risk-lookup clients.

use std::collections::HashMap;
use std::env;
use std::time::Duration;

/// Default per-call timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Network ids that accept an `EXPLORER_<ID>_API_URL` override.
const KNOWN_NETWORK_IDS: [&str; 3] = ["ethereum", "sepolia", "holesky"];

/// Configuration for the block-explorer client.
#[derive(Debug, Clone)]
pub struct ExplorerConfig {
    /// API key sent as the `apikey` query parameter on every call.
    pub api_key: Option<String>,

    /// Timeout for a single explorer call.
    pub timeout: Duration,

    /// Base URL overrides keyed by network id.
    pub api_urls: HashMap<String, String>,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            api_urls: HashMap::new(),
        }
    }
}

impl ExplorerConfig {
    /// Create configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `EXPLORER_API_KEY` - Explorer API key
    /// - `EXPLORER_TIMEOUT_SECS` - Per-call timeout (default: 10)
    /// - `EXPLORER_<ID>_API_URL` - Base URL override for network `<id>`
    ///   (`ETHEREUM`, `SEPOLIA`, `HOLESKY`)
    pub fn from_env() -> Self {
        let api_key = env::var("EXPLORER_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let timeout = env::var("EXPLORER_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        let api_urls = KNOWN_NETWORK_IDS
            .iter()
            .filter_map(|id| {
                let var = format!("EXPLORER_{}_API_URL", id.to_uppercase());
                env::var(var)
                    .ok()
                    .filter(|url| !url.trim().is_empty())
                    .map(|url| (id.to_string(), url))
            })
            .collect();

        Self {
            api_key,
            timeout,
            api_urls,
        }
    }

    /// Create a new config builder.
    pub fn builder() -> ExplorerConfigBuilder {
        ExplorerConfigBuilder::default()
    }

    /// The base URL for `network_id`, or `default` if not overridden.
    pub fn api_url_for<'a>(&'a self, network_id: &str, default: &'a str) -> &'a str {
        self.api_urls
            .get(network_id)
            .map(String::as_str)
            .unwrap_or(default)
    }
}

/// Builder for ExplorerConfig.
#[derive(Debug, Default)]
pub struct ExplorerConfigBuilder {
    config: ExplorerConfig,
}

impl ExplorerConfigBuilder {
    /// Set the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = Some(key.into());
        self
    }

    /// Set the per-call timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Override the base URL of one network.
    pub fn api_url(mut self, network_id: impl Into<String>, url: impl Into<String>) -> Self {
        self.config.api_urls.insert(network_id.into(), url.into());
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ExplorerConfig {
        self.config
    }
}

/// Configuration for the third-party wallet-risk lookup.
///
/// The lookup is disabled unless both a URL and a key are configured.
#[derive(Debug, Clone, Default)]
pub struct RiskConfig {
    /// Base URL; `/wallets` is appended.
    pub api_url: Option<String>,

    /// Bearer credential.
    pub api_key: Option<String>,

    /// Timeout for the lookup.
    pub timeout: Option<Duration>,
}

impl RiskConfig {
    /// Create configuration from `RISK_API_URL` and `RISK_API_KEY`.
    pub fn from_env() -> Self {
        let non_blank = |name: &str| env::var(name).ok().filter(|v| !v.trim().is_empty());
        Self {
            api_url: non_blank("RISK_API_URL"),
            api_key: non_blank("RISK_API_KEY"),
            timeout: None,
        }
    }

    /// Create an enabled configuration.
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_url: Some(api_url.into()),
            api_key: Some(api_key.into()),
            timeout: None,
        }
    }

    /// Whether lookups should be attempted.
    pub fn is_enabled(&self) -> bool {
        self.api_url.is_some() && self.api_key.is_some()
    }
}
