//! Orchestrator configuration.

use std::env;
use std::time::Duration;

/// Default lower bound of the fallback delay in milliseconds.
pub const DEFAULT_FALLBACK_DELAY_MIN_MS: u64 = 1000;

/// Default upper bound of the fallback delay in milliseconds.
pub const DEFAULT_FALLBACK_DELAY_MAX_MS: u64 = 3000;

/// Configuration for the answer pipeline.
#[derive(Debug, Clone)]
pub struct OrchestratorConfig {
    /// Send handler text to the model for analysis before replying.
    pub analyze_with_model: bool,

    /// Bounds of the pause taken before a canned fallback reply.
    pub fallback_delay_min: Duration,
    pub fallback_delay_max: Duration,

    /// SQLite URL for the persisted credential. In-memory storage when unset.
    pub database_url: Option<String>,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            analyze_with_model: true,
            fallback_delay_min: Duration::from_millis(DEFAULT_FALLBACK_DELAY_MIN_MS),
            fallback_delay_max: Duration::from_millis(DEFAULT_FALLBACK_DELAY_MAX_MS),
            database_url: None,
        }
    }
}

impl OrchestratorConfig {
    /// Create configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ASSISTANT_ANALYZE_WITH_MODEL` - `false`/`0` returns handler text directly (default: true)
    /// - `ASSISTANT_FALLBACK_DELAY_MIN_MS` - Fallback delay lower bound (default: 1000)
    /// - `ASSISTANT_FALLBACK_DELAY_MAX_MS` - Fallback delay upper bound (default: 3000)
    /// - `ASSISTANT_DATABASE_URL` - SQLite URL for the credential setting
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let analyze_with_model = env::var("ASSISTANT_ANALYZE_WITH_MODEL")
            .ok()
            .map(|v| !matches!(v.trim().to_lowercase().as_str(), "false" | "0" | "no" | "off"))
            .unwrap_or(defaults.analyze_with_model);

        let millis = |name: &str, default: Duration| {
            env::var(name)
                .ok()
                .and_then(|v| v.trim().parse::<u64>().ok())
                .map(Duration::from_millis)
                .unwrap_or(default)
        };

        let database_url = env::var("ASSISTANT_DATABASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());

        Self {
            analyze_with_model,
            fallback_delay_min: millis("ASSISTANT_FALLBACK_DELAY_MIN_MS", defaults.fallback_delay_min),
            fallback_delay_max: millis("ASSISTANT_FALLBACK_DELAY_MAX_MS", defaults.fallback_delay_max),
            database_url,
        }
    }

    /// Create a new config builder.
    pub fn builder() -> OrchestratorConfigBuilder {
        OrchestratorConfigBuilder::default()
    }
}

/// Builder for OrchestratorConfig.
#[derive(Debug, Default)]
pub struct OrchestratorConfigBuilder {
    config: OrchestratorConfig,
}

impl OrchestratorConfigBuilder {
    pub fn analyze_with_model(mut self, enabled: bool) -> Self {
        self.config.analyze_with_model = enabled;
        self
    }

    pub fn fallback_delay(mut self, min: Duration, max: Duration) -> Self {
        self.config.fallback_delay_min = min;
        self.config.fallback_delay_max = max;
        self
    }

    /// Reply with canned text immediately.
    pub fn no_fallback_delay(self) -> Self {
        self.fallback_delay(Duration::ZERO, Duration::ZERO)
    }

    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.config.database_url = Some(url.into());
        self
    }

    pub fn build(self) -> OrchestratorConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const VARS: [&str; 4] = [
        "ASSISTANT_ANALYZE_WITH_MODEL",
        "ASSISTANT_FALLBACK_DELAY_MIN_MS",
        "ASSISTANT_FALLBACK_DELAY_MAX_MS",
        "ASSISTANT_DATABASE_URL",
    ];

    #[test]
    fn test_default_config() {
        let config = OrchestratorConfig::default();
        assert!(config.analyze_with_model);
        assert_eq!(config.fallback_delay_min, Duration::from_millis(1000));
        assert_eq!(config.fallback_delay_max, Duration::from_millis(3000));
        assert!(config.database_url.is_none());
    }

    #[test]
    fn test_builder() {
        let config = OrchestratorConfig::builder()
            .analyze_with_model(false)
            .no_fallback_delay()
            .database_url("sqlite::memory:")
            .build();

        assert!(!config.analyze_with_model);
        assert_eq!(config.fallback_delay_max, Duration::ZERO);
        assert_eq!(config.database_url.as_deref(), Some("sqlite::memory:"));
    }

    #[test]
    fn test_from_env() {
        let _guard = ENV_LOCK.lock().unwrap();
        for var in VARS {
            env::remove_var(var);
        }

        let config = OrchestratorConfig::from_env();
        assert!(config.analyze_with_model);
        assert_eq!(config.fallback_delay_min, Duration::from_millis(1000));

        env::set_var("ASSISTANT_ANALYZE_WITH_MODEL", "false");
        env::set_var("ASSISTANT_FALLBACK_DELAY_MIN_MS", "0");
        env::set_var("ASSISTANT_FALLBACK_DELAY_MAX_MS", "not-a-number");
        env::set_var("ASSISTANT_DATABASE_URL", "sqlite://assistant.db");

        let config = OrchestratorConfig::from_env();
        assert!(!config.analyze_with_model);
        assert_eq!(config.fallback_delay_min, Duration::ZERO);
        assert_eq!(config.fallback_delay_max, Duration::from_millis(3000));
        assert_eq!(config.database_url.as_deref(), Some("sqlite://assistant.db"));

        for var in VARS {
            env::remove_var(var);
        }
    }
}
