use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::content::fields::{
    SUMMARY_MAX, TITLE_MAX, optional, required, slugify, validate_slug,
};
use crate::model::content::{ContentError, Entity, EntityKind, EntityMeta};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    #[serde(flatten)]
    meta: EntityMeta,
    title: String,
    slug: String,
    author: String,
    excerpt: Option<String>,
    body: String,
    tags: Vec<String>,
    published_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BlogPostDraft {
    pub title: String,
    /// Left blank, the slug is derived from the title.
    pub slug: String,
    pub author: String,
    pub excerpt: Option<String>,
    pub body: String,
    pub tags: Vec<String>,
    pub published_at: Option<DateTime<Utc>>,
}

impl Entity for BlogPost {
    const KIND: EntityKind = EntityKind::BlogPost;
    type Draft = BlogPostDraft;

    fn from_draft(draft: BlogPostDraft, meta: EntityMeta) -> Result<Self, ContentError> {
        let title = required("title", &draft.title, TITLE_MAX)?;
        let slug = match optional(Some(draft.slug.as_str())) {
            Some(slug) => validate_slug(&slug)?,
            None => validate_slug(&slugify(&title))?,
        };

        let mut tags: Vec<String> = draft
            .tags
            .iter()
            .filter_map(|tag| optional(Some(tag.as_str())))
            .map(|tag| tag.to_lowercase())
            .collect();
        tags.sort();
        tags.dedup();

        let excerpt = optional(draft.excerpt.as_deref());
        if excerpt.as_ref().is_some_and(|e| e.chars().count() > SUMMARY_MAX) {
            return Err(ContentError::TooLong {
                field: "excerpt",
                max: SUMMARY_MAX,
            });
        }

        Ok(Self {
            meta,
            title,
            slug,
            author: required("author", &draft.author, TITLE_MAX)?,
            excerpt,
            body: required("body", &draft.body, usize::MAX)?,
            tags,
            published_at: draft.published_at,
        })
    }

    fn meta(&self) -> &EntityMeta {
        &self.meta
    }

    fn label(&self) -> &str {
        &self.title
    }
}

impl BlogPost {
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn slug(&self) -> &str {
        &self.slug
    }

    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    #[must_use]
    pub fn excerpt(&self) -> Option<&str> {
        self.excerpt.as_deref()
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    #[must_use]
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        self.published_at
    }

    #[must_use]
    pub fn is_published(&self, now: DateTime<Utc>) -> bool {
        self.published_at.is_some_and(|at| at <= now)
    }

    #[must_use]
    pub fn to_draft(&self) -> BlogPostDraft {
        BlogPostDraft {
            title: self.title.clone(),
            slug: self.slug.clone(),
            author: self.author.clone(),
            excerpt: self.excerpt.clone(),
            body: self.body.clone(),
            tags: self.tags.clone(),
            published_at: self.published_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EntityId;
    use crate::time::fixed_now;

    fn meta() -> EntityMeta {
        EntityMeta::created(EntityId::new("post-1"), fixed_now())
    }

    fn draft() -> BlogPostDraft {
        BlogPostDraft {
            title: "Hour of Code Recap".into(),
            author: "Sam".into(),
            body: "We built games all afternoon.".into(),
            tags: vec!["Events".into(), " events ".into(), "games".into(), " ".into()],
            ..BlogPostDraft::default()
        }
    }

    #[test]
    fn slug_is_derived_from_title() {
        let post = BlogPost::from_draft(draft(), meta()).unwrap();
        assert_eq!(post.slug(), "hour-of-code-recap");
    }

    #[test]
    fn tags_are_normalized() {
        let post = BlogPost::from_draft(draft(), meta()).unwrap();
        assert_eq!(post.tags(), ["events".to_string(), "games".to_string()]);
    }

    #[test]
    fn explicit_slug_must_be_valid() {
        let mut d = draft();
        d.slug = "Bad Slug".into();
        assert!(matches!(
            BlogPost::from_draft(d, meta()).unwrap_err(),
            ContentError::InvalidSlug(_)
        ));
    }

    #[test]
    fn unpublished_until_date() {
        let mut d = draft();
        d.published_at = Some(fixed_now());
        let post = BlogPost::from_draft(d, meta()).unwrap();
        assert!(post.is_published(fixed_now()));
        assert!(!BlogPost::from_draft(draft(), meta()).unwrap().is_published(fixed_now()));
    }
}
