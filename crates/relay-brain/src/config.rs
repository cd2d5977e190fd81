//! Configuration for RelayBrain.

use brain_core::BrainError;
use std::env;
use std::path::Path;
use std::time::Duration;

/// Default system prompt file name.
pub const DEFAULT_PROMPT_FILE: &str = "SYSTEM_PROMPT.md";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for RelayBrain.
#[derive(Debug, Clone)]
pub struct RelayBrainConfig {
    /// Full URL of the relay's completion endpoint.
    pub api_url: String,

    /// Static bearer credential. A per-request key takes precedence.
    pub api_key: Option<String>,

    /// Optional system prompt prepended to every conversation.
    pub system_prompt: Option<String>,

    /// Timeout for a single relay call.
    pub timeout: Duration,
}

impl Default for RelayBrainConfig {
    fn default() -> Self {
        Self {
            api_url: String::new(),
            api_key: None,
            system_prompt: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl RelayBrainConfig {
    /// Create configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `RELAY_API_URL` - Completion endpoint URL
    ///
    /// Optional environment variables:
    /// - `RELAY_API_KEY` - Static bearer credential
    /// - `RELAY_SYSTEM_PROMPT` - System prompt (overrides prompt file)
    /// - `RELAY_PROMPT_FILE` - Path to system prompt file (default: SYSTEM_PROMPT.md)
    /// - `RELAY_TIMEOUT_SECS` - Request timeout (default: 30)
    pub fn from_env() -> Result<Self, BrainError> {
        let api_url = env::var("RELAY_API_URL")
            .map_err(|_| BrainError::Configuration("RELAY_API_URL not set".to_string()))?;

        let api_key = env::var("RELAY_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let system_prompt = if let Ok(prompt) = env::var("RELAY_SYSTEM_PROMPT") {
            Some(prompt)
        } else {
            let prompt_file = env::var("RELAY_PROMPT_FILE")
                .unwrap_or_else(|_| DEFAULT_PROMPT_FILE.to_string());
            load_prompt_file(&prompt_file)
        };

        let timeout = env::var("RELAY_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        Ok(Self {
            api_url,
            api_key,
            system_prompt,
            timeout,
        })
    }

    /// Create a new config builder.
    pub fn builder() -> RelayBrainConfigBuilder {
        RelayBrainConfigBuilder::default()
    }
}

/// Builder for RelayBrainConfig.
#[derive(Debug, Default)]
pub struct RelayBrainConfigBuilder {
    config: RelayBrainConfig,
}

impl RelayBrainConfigBuilder {
    /// Set the endpoint URL.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_url = url.into();
        self
    }

    /// Set the static API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = Some(key.into());
        self
    }

    /// Set the system prompt.
    pub fn system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.config.system_prompt = Some(prompt.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Load system prompt from a file if it exists and is non-empty.
    pub fn load_prompt_file(mut self, path: impl AsRef<Path>) -> Self {
        if let Some(prompt) = load_prompt_file(path) {
            self.config.system_prompt = Some(prompt);
        }
        self
    }

    /// Build the configuration.
    pub fn build(self) -> RelayBrainConfig {
        self.config
    }
}

/// Load a prompt file, returning None if not found or empty.
fn load_prompt_file(path: impl AsRef<Path>) -> Option<String> {
    let content = std::fs::read_to_string(path).ok()?;
    let trimmed = content.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RelayBrainConfig::default();

        assert!(config.api_url.is_empty());
        assert!(config.api_key.is_none());
        assert!(config.system_prompt.is_none());
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_builder_all_options() {
        let config = RelayBrainConfig::builder()
            .api_url("https://relay.example/chat")
            .api_key("relay-key")
            .system_prompt("You explain Ethereum data.")
            .timeout(Duration::from_secs(5))
            .build();

        assert_eq!(config.api_url, "https://relay.example/chat");
        assert_eq!(config.api_key.as_deref(), Some("relay-key"));
        assert_eq!(
            config.system_prompt.as_deref(),
            Some("You explain Ethereum data.")
        );
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_builder_missing_prompt_file_keeps_none() {
        let config = RelayBrainConfig::builder()
            .load_prompt_file("/definitely/not/here.md")
            .build();
        assert!(config.system_prompt.is_none());
    }

    // Environment-based tests share one test to avoid races on process-global env vars.
    #[test]
    fn test_from_env_scenarios() {
        use std::sync::Mutex;
        static ENV_LOCK: Mutex<()> = Mutex::new(());
        let _guard = ENV_LOCK.lock().unwrap();

        fn clear_all_relay_vars() {
            std::env::remove_var("RELAY_API_URL");
            std::env::remove_var("RELAY_API_KEY");
            std::env::remove_var("RELAY_SYSTEM_PROMPT");
            std::env::remove_var("RELAY_PROMPT_FILE");
            std::env::remove_var("RELAY_TIMEOUT_SECS");
        }

        // Missing URL is a configuration error
        clear_all_relay_vars();
        match RelayBrainConfig::from_env() {
            Err(BrainError::Configuration(msg)) => assert!(msg.contains("RELAY_API_URL")),
            other => panic!("Expected Configuration error, got {:?}", other),
        }

        // URL only, defaults elsewhere
        clear_all_relay_vars();
        std::env::set_var("RELAY_API_URL", "https://relay.test/chat");
        std::env::set_var("RELAY_PROMPT_FILE", "/definitely/not/here.md");
        let config = RelayBrainConfig::from_env().unwrap();
        assert_eq!(config.api_url, "https://relay.test/chat");
        assert!(config.api_key.is_none());
        assert!(config.system_prompt.is_none());
        assert_eq!(config.timeout, Duration::from_secs(30));

        // Everything set; blank key counts as absent
        clear_all_relay_vars();
        std::env::set_var("RELAY_API_URL", "https://relay.test/chat");
        std::env::set_var("RELAY_API_KEY", "   ");
        std::env::set_var("RELAY_SYSTEM_PROMPT", "Be brief");
        std::env::set_var("RELAY_TIMEOUT_SECS", "7");
        let config = RelayBrainConfig::from_env().unwrap();
        assert!(config.api_key.is_none());
        assert_eq!(config.system_prompt.as_deref(), Some("Be brief"));
        assert_eq!(config.timeout, Duration::from_secs(7));

        clear_all_relay_vars();
    }
}
