use quest_core::model::Entity;
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

use crate::repository::{StorageError, decode_entity};

pub(crate) fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

pub(crate) fn conn<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Connection(e.to_string())
}

/// Inserts report a duplicate primary key as `Conflict`; everything else is a connection error.
pub(crate) fn insert_error(err: sqlx::Error) -> StorageError {
    match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() => StorageError::Conflict,
        _ => conn(err),
    }
}

pub(crate) fn entity_from_row<E: Entity>(row: &SqliteRow) -> Result<E, StorageError> {
    let body: String = row.try_get("body").map_err(ser)?;
    decode_entity(&body)
}
