//! Model-backend credential storage.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use database::setting as setting_store;
use database::Database;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::error::OrchestratorError;

/// Settings key under which the credential is persisted.
pub const MODEL_API_KEY_SETTING: &str = "model_api_key";

/// Durable key/value storage behind the credential cache.
#[async_trait]
pub trait SettingsStorage: Send + Sync {
    async fn load(&self, key: &str) -> Result<Option<String>, OrchestratorError>;
    async fn store(&self, key: &str, value: &str) -> Result<(), OrchestratorError>;
    async fn remove(&self, key: &str) -> Result<(), OrchestratorError>;
}

/// Process-local settings.
#[derive(Debug, Default)]
pub struct MemorySettings {
    values: RwLock<HashMap<String, String>>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SettingsStorage for MemorySettings {
    async fn load(&self, key: &str) -> Result<Option<String>, OrchestratorError> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn store(&self, key: &str, value: &str) -> Result<(), OrchestratorError> {
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), OrchestratorError> {
        self.values.write().await.remove(key);
        Ok(())
    }
}

/// Settings persisted in the SQLite `settings` table.
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    database: Database,
}

impl DatabaseSettings {
    pub fn new(database: Database) -> Self {
        Self { database }
    }

    /// Connect, run migrations and wrap the database.
    pub async fn connect(url: &str) -> Result<Self, OrchestratorError> {
        let database = Database::connect(url).await?;
        database.migrate().await?;
        info!("Settings database ready");
        Ok(Self::new(database))
    }

    pub fn database(&self) -> &Database {
        &self.database
    }
}

#[async_trait]
impl SettingsStorage for DatabaseSettings {
    async fn load(&self, key: &str) -> Result<Option<String>, OrchestratorError> {
        let record = setting_store::get_setting(self.database.pool(), key).await?;
        Ok(record.map(|setting| setting.value))
    }

    async fn store(&self, key: &str, value: &str) -> Result<(), OrchestratorError> {
        setting_store::upsert_setting(self.database.pool(), key, value).await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), OrchestratorError> {
        setting_store::clear_setting(self.database.pool(), key).await?;
        Ok(())
    }
}

/// The model-backend credential, cached in front of a [`SettingsStorage`].
///
/// Storage failures are logged and never surface to callers: a failed
/// read is treated as "no credential".
pub struct CredentialStore {
    cached: RwLock<Option<String>>,
    storage: Arc<dyn SettingsStorage>,
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl CredentialStore {
    pub fn new(storage: Arc<dyn SettingsStorage>) -> Self {
        Self {
            cached: RwLock::new(None),
            storage,
        }
    }

    /// Store with no persistence beyond the process.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemorySettings::new()))
    }

    /// Current credential, read through from storage on a cache miss.
    pub async fn get(&self) -> Option<String> {
        if let Some(key) = self.cached.read().await.clone() {
            return Some(key);
        }

        match self.storage.load(MODEL_API_KEY_SETTING).await {
            Ok(Some(key)) => {
                *self.cached.write().await = Some(key.clone());
                Some(key)
            }
            Ok(None) => None,
            Err(err) => {
                warn!("Failed to load model credential: {}", err);
                None
            }
        }
    }

    /// Replace the credential.
    ///
    /// A blank key is rejected and the current credential is kept; use
    /// [`CredentialStore::clear`] to remove it.
    pub async fn set(&self, key: &str) -> Result<(), OrchestratorError> {
        let key = key.trim();
        if key.is_empty() {
            return Err(OrchestratorError::InvalidCredential(
                "API key must not be blank".to_string(),
            ));
        }

        *self.cached.write().await = Some(key.to_string());
        if let Err(err) = self.storage.store(MODEL_API_KEY_SETTING, key).await {
            warn!("Failed to persist model credential: {}", err);
        }
        Ok(())
    }

    pub async fn clear(&self) {
        *self.cached.write().await = None;
        if let Err(err) = self.storage.remove(MODEL_API_KEY_SETTING).await {
            warn!("Failed to clear model credential: {}", err);
        }
    }
}
