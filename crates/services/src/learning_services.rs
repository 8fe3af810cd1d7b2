use std::sync::Arc;

use learn_core::Catalog;
use storage::repository::Storage;

use crate::error::LearningServicesError;
use crate::learner::LearnerStateService;

/// Assembles the catalog and learner state behind one handle.
#[derive(Clone)]
pub struct LearningServices {
    catalog: Arc<Catalog>,
    learner_state: Arc<LearnerStateService>,
}

impl LearningServices {
    #[must_use]
    pub fn new(catalog: Catalog, storage: &Storage) -> Self {
        Self {
            catalog: Arc::new(catalog),
            learner_state: Arc::new(LearnerStateService::new(Arc::clone(&storage.kv))),
        }
    }

    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `LearningServicesError` if the database cannot be opened or
    /// migrated.
    pub async fn new_sqlite(db_url: &str, catalog: Catalog) -> Result<Self, LearningServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        tracing::info!(courses = catalog.len(), "learning services ready");
        Ok(Self::new(catalog, &storage))
    }

    /// Services over the bundled catalog and throwaway in-memory state.
    ///
    /// # Errors
    ///
    /// Returns `LearningServicesError::Catalog` if the bundled catalog is invalid.
    pub fn in_memory() -> Result<Self, LearningServicesError> {
        Ok(Self::new(Catalog::bundled()?, &Storage::in_memory()))
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn learner_state(&self) -> Arc<LearnerStateService> {
        Arc::clone(&self.learner_state)
    }
}
