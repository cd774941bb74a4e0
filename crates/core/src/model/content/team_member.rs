use serde::{Deserialize, Serialize};

use crate::model::content::fields::{SUMMARY_MAX, TITLE_MAX, optional, optional_url, required};
use crate::model::content::{ContentError, Entity, EntityKind, EntityMeta};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    #[serde(flatten)]
    meta: EntityMeta,
    name: String,
    position: String,
    bio: Option<String>,
    photo_url: Option<String>,
    sort_order: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TeamMemberDraft {
    pub name: String,
    pub position: String,
    pub bio: Option<String>,
    pub photo_url: Option<String>,
    pub sort_order: u32,
}

impl Entity for TeamMember {
    const KIND: EntityKind = EntityKind::TeamMember;
    type Draft = TeamMemberDraft;

    fn from_draft(draft: TeamMemberDraft, meta: EntityMeta) -> Result<Self, ContentError> {
        let bio = optional(draft.bio.as_deref());
        if bio.as_ref().is_some_and(|b| b.chars().count() > SUMMARY_MAX * 4) {
            return Err(ContentError::TooLong {
                field: "bio",
                max: SUMMARY_MAX * 4,
            });
        }
        Ok(Self {
            meta,
            name: required("name", &draft.name, TITLE_MAX)?,
            position: required("position", &draft.position, TITLE_MAX)?,
            bio,
            photo_url: optional_url("photo_url", draft.photo_url.as_deref())?,
            sort_order: draft.sort_order,
        })
    }

    fn meta(&self) -> &EntityMeta {
        &self.meta
    }

    fn label(&self) -> &str {
        &self.name
    }
}

impl TeamMember {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn position(&self) -> &str {
        &self.position
    }

    #[must_use]
    pub fn bio(&self) -> Option<&str> {
        self.bio.as_deref()
    }

    #[must_use]
    pub fn photo_url(&self) -> Option<&str> {
        self.photo_url.as_deref()
    }

    #[must_use]
    pub fn sort_order(&self) -> u32 {
        self.sort_order
    }
}
