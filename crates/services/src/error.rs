//! Shared error types for the services crate.

use thiserror::Error;

use learn_core::CatalogError;
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by `LearnerStateService` mutations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LearnerStateError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("failed to encode learner state: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Errors emitted while bootstrapping services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LearningServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
