//! Database models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored process-wide setting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Setting {
    /// Setting name (e.g., "model_api_key").
    pub key: String,
    /// Stored value.
    pub value: String,
    /// Last update timestamp.
    pub updated_at: String,
}
