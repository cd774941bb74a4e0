use std::sync::Arc;

use quest_core::model::Catalog;
use storage::ProgressStore;
use storage::repository::Storage;

use crate::Clock;
use crate::adventure::AdventureService;
use crate::content_service::ContentServices;
use crate::error::AppServicesError;

/// Assembles app-facing services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    adventure: Arc<AdventureService>,
    content: ContentServices,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(db_url: &str, clock: Clock) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(&storage, clock, Catalog::standard()).await)
    }

    /// Build services over process-local storage.
    pub async fn in_memory(clock: Clock) -> Self {
        Self::from_storage(&Storage::in_memory(), clock, Catalog::standard()).await
    }

    pub async fn from_storage(storage: &Storage, clock: Clock, catalog: Catalog) -> Self {
        let store = ProgressStore::new(Arc::clone(&storage.slots));
        let adventure = Arc::new(AdventureService::open(Arc::new(catalog), store).await);
        Self {
            adventure,
            content: ContentServices::new(clock, storage),
        }
    }

    #[must_use]
    pub fn adventure(&self) -> Arc<AdventureService> {
        Arc::clone(&self.adventure)
    }

    #[must_use]
    pub fn content(&self) -> &ContentServices {
        &self.content
    }
}
