use async_trait::async_trait;
use quest_core::model::{Entity, EntityId};

use super::SqliteRepository;
use super::mapping::{conn, entity_from_row, insert_error};
use crate::repository::{EntityRepository, StorageError, encode_entity};

#[async_trait]
impl<E: Entity> EntityRepository<E> for SqliteRepository {
    async fn insert(&self, entity: &E) -> Result<(), StorageError> {
        let body = encode_entity(entity)?;
        sqlx::query(
            r"
            INSERT INTO entities (kind, id, body, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ",
        )
        .bind(E::KIND.as_str())
        .bind(entity.id().as_str())
        .bind(body)
        .bind(entity.created_at())
        .bind(entity.updated_at())
        .execute(&self.pool)
        .await
        .map_err(insert_error)?;

        Ok(())
    }

    async fn get(&self, id: &EntityId) -> Result<Option<E>, StorageError> {
        let row = sqlx::query("SELECT body FROM entities WHERE kind = ?1 AND id = ?2")
            .bind(E::KIND.as_str())
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(conn)?;

        match row {
            Some(row) => entity_from_row(&row).map(Some),
            None => Ok(None),
        }
    }

    async fn list(&self, limit: u32) -> Result<Vec<E>, StorageError> {
        let rows = sqlx::query(
            r"
            SELECT body
            FROM entities
            WHERE kind = ?1
            ORDER BY created_at ASC, id ASC
            LIMIT ?2
            ",
        )
        .bind(E::KIND.as_str())
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(conn)?;

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            items.push(entity_from_row(&row)?);
        }
        Ok(items)
    }

    async fn update(&self, entity: &E) -> Result<(), StorageError> {
        let body = encode_entity(entity)?;
        let res = sqlx::query(
            r"
            UPDATE entities
            SET body = ?3, updated_at = ?4
            WHERE kind = ?1 AND id = ?2
            ",
        )
        .bind(E::KIND.as_str())
        .bind(entity.id().as_str())
        .bind(body)
        .bind(entity.updated_at())
        .execute(&self.pool)
        .await
        .map_err(conn)?;

        if res.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: &EntityId) -> Result<(), StorageError> {
        let res = sqlx::query("DELETE FROM entities WHERE kind = ?1 AND id = ?2")
            .bind(E::KIND.as_str())
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(conn)?;

        if res.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }
        Ok(())
    }
}
