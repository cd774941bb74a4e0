use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::content::fields::{SUMMARY_MAX, TITLE_MAX, optional, optional_url, required};
use crate::model::content::{ContentError, Entity, EntityKind, EntityMeta};

/// A workshop, camp or showcase listed on the events page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(flatten)]
    meta: EntityMeta,
    title: String,
    description: String,
    location: String,
    starts_at: DateTime<Utc>,
    ends_at: Option<DateTime<Utc>>,
    registration_url: Option<String>,
    published: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub location: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: Option<DateTime<Utc>>,
    pub registration_url: Option<String>,
    pub published: bool,
}

impl Entity for Event {
    const KIND: EntityKind = EntityKind::Event;
    type Draft = EventDraft;

    fn from_draft(draft: EventDraft, meta: EntityMeta) -> Result<Self, ContentError> {
        if let Some(ends_at) = draft.ends_at {
            if ends_at < draft.starts_at {
                return Err(ContentError::InvalidTimeRange);
            }
        }

        Ok(Self {
            meta,
            title: required("title", &draft.title, TITLE_MAX)?,
            description: optional(Some(draft.description.as_str())).unwrap_or_default(),
            location: required("location", &draft.location, SUMMARY_MAX)?,
            starts_at: draft.starts_at,
            ends_at: draft.ends_at,
            registration_url: optional_url("registration_url", draft.registration_url.as_deref())?,
            published: draft.published,
        })
    }

    fn meta(&self) -> &EntityMeta {
        &self.meta
    }

    fn label(&self) -> &str {
        &self.title
    }
}

impl Event {
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    #[must_use]
    pub fn starts_at(&self) -> DateTime<Utc> {
        self.starts_at
    }

    #[must_use]
    pub fn ends_at(&self) -> Option<DateTime<Utc>> {
        self.ends_at
    }

    #[must_use]
    pub fn registration_url(&self) -> Option<&str> {
        self.registration_url.as_deref()
    }

    #[must_use]
    pub fn is_published(&self) -> bool {
        self.published
    }

    /// Upcoming relative to `now` (still running counts as upcoming).
    #[must_use]
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.ends_at.unwrap_or(self.starts_at) >= now
    }

    /// Convert back into an editable draft.
    #[must_use]
    pub fn to_draft(&self) -> EventDraft {
        EventDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            location: self.location.clone(),
            starts_at: self.starts_at,
            ends_at: self.ends_at,
            registration_url: self.registration_url.clone(),
            published: self.published,
        }
    }
}
