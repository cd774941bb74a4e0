use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::model::content::ContentError;
use crate::model::ids::EntityId;

/// Collections managed from the back office.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Event,
    BlogPost,
    Media,
    Testimonial,
    TeamMember,
    User,
}

impl EntityKind {
    pub const ALL: [EntityKind; 6] = [
        EntityKind::Event,
        EntityKind::BlogPost,
        EntityKind::Media,
        EntityKind::Testimonial,
        EntityKind::TeamMember,
        EntityKind::User,
    ];

    /// Stable collection key used by storage backends.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Event => "events",
            EntityKind::BlogPost => "blog_posts",
            EntityKind::Media => "media",
            EntityKind::Testimonial => "testimonials",
            EntityKind::TeamMember => "team",
            EntityKind::User => "users",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            EntityKind::Event => "Events",
            EntityKind::BlogPost => "Blog posts",
            EntityKind::Media => "Media",
            EntityKind::Testimonial => "Testimonials",
            EntityKind::TeamMember => "Team",
            EntityKind::User => "Users",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity and timestamps shared by every managed entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityMeta {
    pub id: EntityId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl EntityMeta {
    /// Metadata for an entity created at `now`.
    #[must_use]
    pub fn created(id: EntityId, now: DateTime<Utc>) -> Self {
        Self {
            id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Same identity, stamped as updated at `now`.
    #[must_use]
    pub fn touched(&self, now: DateTime<Utc>) -> Self {
        Self {
            id: self.id.clone(),
            created_at: self.created_at,
            updated_at: now,
        }
    }
}

/// A typed back-office record with a validating draft.
pub trait Entity: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    const KIND: EntityKind;

    /// Unvalidated form input for this entity.
    type Draft: Clone + Send + Sync + 'static;

    /// Validate a draft and attach identity/timestamps.
    ///
    /// # Errors
    ///
    /// Returns `ContentError` when a field fails validation.
    fn from_draft(draft: Self::Draft, meta: EntityMeta) -> Result<Self, ContentError>;

    fn meta(&self) -> &EntityMeta;

    /// Short human label for lists.
    fn label(&self) -> &str;

    fn id(&self) -> &EntityId {
        &self.meta().id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.meta().created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.meta().updated_at
    }
}
