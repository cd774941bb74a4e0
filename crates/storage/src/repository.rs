use async_trait::async_trait;
use quest_core::model::{
    BlogPost, Entity, EntityId, EntityKind, Event, MediaItem, TeamMember, Testimonial, User,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("conflict")]
    Conflict,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Named slots holding opaque text values.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a slot.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn read_slot(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value of a slot in a single write.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be stored.
    async fn write_slot(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a slot. Removing a missing slot is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    async fn clear_slot(&self, key: &str) -> Result<(), StorageError>;
}

/// Repository contract for one back-office collection.
#[async_trait]
pub trait EntityRepository<E: Entity>: Send + Sync {
    /// Store a new entity.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Conflict` if the id is taken, or other storage errors.
    async fn insert(&self, entity: &E) -> Result<(), StorageError>;

    /// Fetch an entity by id. Returns `Ok(None)` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend fails or the stored body cannot be decoded.
    async fn get(&self, id: &EntityId) -> Result<Option<E>, StorageError>;

    /// List entities, oldest first, up to `limit`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend fails or a stored body cannot be decoded.
    async fn list(&self, limit: u32) -> Result<Vec<E>, StorageError>;

    /// Replace an existing entity.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if no entity has this id.
    async fn update(&self, entity: &E) -> Result<(), StorageError>;

    /// Delete an entity.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if no entity has this id.
    async fn delete(&self, id: &EntityId) -> Result<(), StorageError>;
}

pub(crate) fn encode_entity<E: Entity>(entity: &E) -> Result<String, StorageError> {
    serde_json::to_string(entity).map_err(|e| StorageError::Serialization(e.to_string()))
}

pub(crate) fn decode_entity<E: Entity>(body: &str) -> Result<E, StorageError> {
    serde_json::from_str(body).map_err(|e| StorageError::Serialization(e.to_string()))
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    slots: Arc<Mutex<HashMap<String, String>>>,
    entities: Arc<Mutex<HashMap<(EntityKind, EntityId), String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: Arc::new(Mutex::new(HashMap::new())),
            entities: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl KeyValueStore for InMemoryRepository {
    async fn read_slot(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .slots
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    async fn write_slot(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .slots
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn clear_slot(&self, key: &str) -> Result<(), StorageError> {
        let mut guard = self
            .slots
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.remove(key);
        Ok(())
    }
}

#[async_trait]
impl<E: Entity> EntityRepository<E> for InMemoryRepository {
    async fn insert(&self, entity: &E) -> Result<(), StorageError> {
        let body = encode_entity(entity)?;
        let mut guard = self
            .entities
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let key = (E::KIND, entity.id().clone());
        if guard.contains_key(&key) {
            return Err(StorageError::Conflict);
        }
        guard.insert(key, body);
        Ok(())
    }

    async fn get(&self, id: &EntityId) -> Result<Option<E>, StorageError> {
        let guard = self
            .entities
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard
            .get(&(E::KIND, id.clone()))
            .map(|body| decode_entity(body))
            .transpose()
    }

    async fn list(&self, limit: u32) -> Result<Vec<E>, StorageError> {
        let guard = self
            .entities
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        let mut items = guard
            .iter()
            .filter(|((kind, _), _)| *kind == E::KIND)
            .map(|(_, body)| decode_entity::<E>(body))
            .collect::<Result<Vec<_>, _>>()?;
        items.sort_by(|a, b| {
            a.created_at()
                .cmp(&b.created_at())
                .then_with(|| a.id().cmp(b.id()))
        });
        items.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        Ok(items)
    }

    async fn update(&self, entity: &E) -> Result<(), StorageError> {
        let body = encode_entity(entity)?;
        let mut guard = self
            .entities
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        match guard.get_mut(&(E::KIND, entity.id().clone())) {
            Some(slot) => {
                *slot = body;
                Ok(())
            }
            None => Err(StorageError::NotFound),
        }
    }

    async fn delete(&self, id: &EntityId) -> Result<(), StorageError> {
        let mut guard = self
            .entities
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard
            .remove(&(E::KIND, id.clone()))
            .map(|_| ())
            .ok_or(StorageError::NotFound)
    }
}

/// Aggregates the key-value slots and entity repositories behind trait objects for easy
/// backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub slots: Arc<dyn KeyValueStore>,
    pub events: Arc<dyn EntityRepository<Event>>,
    pub blog_posts: Arc<dyn EntityRepository<BlogPost>>,
    pub media: Arc<dyn EntityRepository<MediaItem>>,
    pub testimonials: Arc<dyn EntityRepository<Testimonial>>,
    pub team: Arc<dyn EntityRepository<TeamMember>>,
    pub users: Arc<dyn EntityRepository<User>>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_backend(InMemoryRepository::new())
    }

    pub(crate) fn from_backend<B>(backend: B) -> Self
    where
        B: KeyValueStore
            + EntityRepository<Event>
            + EntityRepository<BlogPost>
            + EntityRepository<MediaItem>
            + EntityRepository<Testimonial>
            + EntityRepository<TeamMember>
            + EntityRepository<User>
            + Clone
            + 'static,
    {
        Self {
            slots: Arc::new(backend.clone()),
            events: Arc::new(backend.clone()),
            blog_posts: Arc::new(backend.clone()),
            media: Arc::new(backend.clone()),
            testimonials: Arc::new(backend.clone()),
            team: Arc::new(backend.clone()),
            users: Arc::new(backend),
        }
    }
}
