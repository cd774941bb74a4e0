use serde::{Deserialize, Serialize};

use crate::model::content::fields::{SUMMARY_MAX, TITLE_MAX, optional, required, required_url};
use crate::model::content::{ContentError, Entity, EntityKind, EntityMeta};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    #[default]
    Image,
    Video,
    Document,
}

impl MediaKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            MediaKind::Image => "Image",
            MediaKind::Video => "Video",
            MediaKind::Document => "Document",
        }
    }
}

/// A gallery item hosted at an external URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    #[serde(flatten)]
    meta: EntityMeta,
    title: String,
    url: String,
    kind: MediaKind,
    alt_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MediaItemDraft {
    pub title: String,
    pub url: String,
    pub kind: MediaKind,
    pub alt_text: Option<String>,
}

impl Entity for MediaItem {
    const KIND: EntityKind = EntityKind::Media;
    type Draft = MediaItemDraft;

    fn from_draft(draft: MediaItemDraft, meta: EntityMeta) -> Result<Self, ContentError> {
        let alt_text = optional(draft.alt_text.as_deref());
        // Gallery images must carry alt text.
        if draft.kind == MediaKind::Image && alt_text.is_none() {
            return Err(ContentError::Empty("alt_text"));
        }
        if alt_text.as_ref().is_some_and(|a| a.chars().count() > SUMMARY_MAX) {
            return Err(ContentError::TooLong {
                field: "alt_text",
                max: SUMMARY_MAX,
            });
        }

        Ok(Self {
            meta,
            title: required("title", &draft.title, TITLE_MAX)?,
            url: required_url("url", &draft.url)?,
            kind: draft.kind,
            alt_text,
        })
    }

    fn meta(&self) -> &EntityMeta {
        &self.meta
    }

    fn label(&self) -> &str {
        &self.title
    }
}

impl MediaItem {
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    #[must_use]
    pub fn alt_text(&self) -> Option<&str> {
        self.alt_text.as_deref()
    }
}
