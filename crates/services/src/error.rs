//! Shared error types for the services crate.

use thiserror::Error;

use quest_core::model::{
    Achievement, ActivityId, CatalogError, ContentError, EntityId, EntityKind, Role, ZoneId,
};
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by `AdventureService`. The progress record is unchanged when one is returned.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AdventureError {
    #[error(transparent)]
    NotFound(#[from] CatalogError),
    #[error("activity {activity} in zone {zone} is locked")]
    Locked { zone: ZoneId, activity: ActivityId },
    #[error("achievement {0} is earned from progress and cannot be granted")]
    NotEventDriven(Achievement),
}

/// Errors emitted by `ContentService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContentServiceError {
    #[error(transparent)]
    Validation(#[from] ContentError),
    #[error("role {role} may not manage {kind}")]
    Forbidden { role: &'static str, kind: EntityKind },
    #[error("{kind} entry {id} not found")]
    NotFound { kind: EntityKind, id: EntityId },
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ContentServiceError {
    pub(crate) fn forbidden(role: Role, kind: EntityKind) -> Self {
        Self::Forbidden {
            role: role.as_str(),
            kind,
        }
    }
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
}
