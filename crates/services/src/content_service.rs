use std::sync::Arc;

use quest_core::model::{
    BlogPost, Entity, EntityId, EntityMeta, Event, Identity, MediaItem, TeamMember, Testimonial,
    User,
};
use storage::repository::{EntityRepository, Storage, StorageError};
use tracing::info;

use crate::Clock;
use crate::error::ContentServiceError;

/// Back-office CRUD for one entity kind.
///
/// Reads are open to everyone since the public pages list the same content. Mutations
/// check the caller's role against the entity kind first.
pub struct ContentService<E: Entity> {
    clock: Clock,
    repo: Arc<dyn EntityRepository<E>>,
}

impl<E: Entity> Clone for ContentService<E> {
    fn clone(&self) -> Self {
        Self {
            clock: self.clock,
            repo: Arc::clone(&self.repo),
        }
    }
}

impl<E: Entity> ContentService<E> {
    #[must_use]
    pub fn new(clock: Clock, repo: Arc<dyn EntityRepository<E>>) -> Self {
        Self { clock, repo }
    }

    fn authorize(identity: &Identity) -> Result<(), ContentServiceError> {
        if identity.role().can_manage(E::KIND) {
            Ok(())
        } else {
            Err(ContentServiceError::forbidden(identity.role(), E::KIND))
        }
    }

    fn not_found(id: &EntityId) -> ContentServiceError {
        ContentServiceError::NotFound {
            kind: E::KIND,
            id: id.clone(),
        }
    }

    /// Validate a draft and store it under a fresh id.
    ///
    /// # Errors
    ///
    /// Returns `ContentServiceError::Forbidden` if the role may not manage this kind,
    /// `ContentServiceError::Validation` for an invalid draft, or
    /// `ContentServiceError::Storage` if persistence fails.
    pub async fn create(
        &self,
        identity: &Identity,
        draft: E::Draft,
    ) -> Result<E, ContentServiceError> {
        Self::authorize(identity)?;
        let meta = EntityMeta::created(EntityId::generate(), self.clock.now());
        let entity = E::from_draft(draft, meta)?;
        self.repo.insert(&entity).await?;
        info!(kind = %E::KIND, id = %entity.id(), user = identity.user(), "content created");
        Ok(entity)
    }

    /// # Errors
    ///
    /// Returns `ContentServiceError::NotFound` if no entity has this id, or
    /// `ContentServiceError::Storage` if the repository fails.
    pub async fn get(&self, id: &EntityId) -> Result<E, ContentServiceError> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| Self::not_found(id))
    }

    /// Entities in creation order, up to `limit`.
    ///
    /// # Errors
    ///
    /// Returns `ContentServiceError::Storage` if the repository fails.
    pub async fn list(&self, limit: u32) -> Result<Vec<E>, ContentServiceError> {
        Ok(self.repo.list(limit).await?)
    }

    /// Replace an entity's fields from a draft, keeping its id and creation time.
    ///
    /// # Errors
    ///
    /// Returns `ContentServiceError::Forbidden`, `ContentServiceError::NotFound`,
    /// `ContentServiceError::Validation`, or `ContentServiceError::Storage`.
    pub async fn update(
        &self,
        identity: &Identity,
        id: &EntityId,
        draft: E::Draft,
    ) -> Result<E, ContentServiceError> {
        Self::authorize(identity)?;
        let existing = self.get(id).await?;
        let entity = E::from_draft(draft, existing.meta().touched(self.clock.now()))?;
        match self.repo.update(&entity).await {
            Ok(()) => {}
            Err(StorageError::NotFound) => return Err(Self::not_found(id)),
            Err(err) => return Err(err.into()),
        }
        info!(kind = %E::KIND, %id, user = identity.user(), "content updated");
        Ok(entity)
    }

    /// # Errors
    ///
    /// Returns `ContentServiceError::Forbidden`, `ContentServiceError::NotFound`, or
    /// `ContentServiceError::Storage`.
    pub async fn delete(
        &self,
        identity: &Identity,
        id: &EntityId,
    ) -> Result<(), ContentServiceError> {
        Self::authorize(identity)?;
        match self.repo.delete(id).await {
            Ok(()) => {}
            Err(StorageError::NotFound) => return Err(Self::not_found(id)),
            Err(err) => return Err(err.into()),
        }
        info!(kind = %E::KIND, %id, user = identity.user(), "content deleted");
        Ok(())
    }
}

/// One content service per back-office collection.
#[derive(Clone)]
pub struct ContentServices {
    pub events: ContentService<Event>,
    pub blog_posts: ContentService<BlogPost>,
    pub media: ContentService<MediaItem>,
    pub testimonials: ContentService<Testimonial>,
    pub team: ContentService<TeamMember>,
    pub users: ContentService<User>,
}

impl ContentServices {
    #[must_use]
    pub fn new(clock: Clock, storage: &Storage) -> Self {
        Self {
            events: ContentService::new(clock, Arc::clone(&storage.events)),
            blog_posts: ContentService::new(clock, Arc::clone(&storage.blog_posts)),
            media: ContentService::new(clock, Arc::clone(&storage.media)),
            testimonials: ContentService::new(clock, Arc::clone(&storage.testimonials)),
            team: ContentService::new(clock, Arc::clone(&storage.team)),
            users: ContentService::new(clock, Arc::clone(&storage.users)),
        }
    }
}
