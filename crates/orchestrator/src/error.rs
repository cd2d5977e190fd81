//! Error types for orchestrator operations.

use brain_core::BrainError;
use database::DatabaseError;
use explorer_tools::ExplorerError;
use thiserror::Error;

/// Errors raised while assembling or running the orchestrator.
///
/// [`crate::Orchestrator::answer`] never returns these; they surface from
/// construction and from credential storage.
#[derive(Debug, Error)]
pub enum OrchestratorError {
    /// Model backend could not be configured.
    #[error("brain error: {0}")]
    Brain(#[from] BrainError),

    /// Explorer client could not be configured.
    #[error("explorer error: {0}")]
    Explorer(#[from] ExplorerError),

    /// Settings database failed.
    #[error("database error: {0}")]
    Database(#[from] DatabaseError),

    /// Credential rejected before it reached storage.
    #[error("invalid credential: {0}")]
    InvalidCredential(String),

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Configuration(String),
}
