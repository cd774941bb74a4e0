use serde::{Deserialize, Serialize};

use crate::model::content::fields::{TITLE_MAX, optional, required};
use crate::model::content::{ContentError, Entity, EntityKind, EntityMeta};

const QUOTE_MAX: usize = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    #[serde(flatten)]
    meta: EntityMeta,
    author: String,
    relation: Option<String>,
    quote: String,
    rating: u8,
    featured: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestimonialDraft {
    pub author: String,
    /// e.g. "Parent", "Student, age 11".
    pub relation: Option<String>,
    pub quote: String,
    pub rating: u8,
    pub featured: bool,
}

impl Entity for Testimonial {
    const KIND: EntityKind = EntityKind::Testimonial;
    type Draft = TestimonialDraft;

    fn from_draft(draft: TestimonialDraft, meta: EntityMeta) -> Result<Self, ContentError> {
        if !(1..=5).contains(&draft.rating) {
            return Err(ContentError::InvalidRating(draft.rating));
        }
        Ok(Self {
            meta,
            author: required("author", &draft.author, TITLE_MAX)?,
            relation: optional(draft.relation.as_deref()),
            quote: required("quote", &draft.quote, QUOTE_MAX)?,
            rating: draft.rating,
            featured: draft.featured,
        })
    }

    fn meta(&self) -> &EntityMeta {
        &self.meta
    }

    fn label(&self) -> &str {
        &self.author
    }
}

impl Testimonial {
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    #[must_use]
    pub fn relation(&self) -> Option<&str> {
        self.relation.as_deref()
    }

    #[must_use]
    pub fn quote(&self) -> &str {
        &self.quote
    }

    #[must_use]
    pub fn rating(&self) -> u8 {
        self.rating
    }

    #[must_use]
    pub fn is_featured(&self) -> bool {
        self.featured
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EntityId;
    use crate::time::fixed_now;

    fn draft(rating: u8) -> TestimonialDraft {
        TestimonialDraft {
            author: "Priya".into(),
            relation: Some("Parent".into()),
            quote: "My daughter now builds games every weekend.".into(),
            rating,
            featured: true,
        }
    }

    #[test]
    fn rating_must_be_one_to_five() {
        let meta = EntityMeta::created(EntityId::new("t-1"), fixed_now());
        assert_eq!(
            Testimonial::from_draft(draft(0), meta.clone()).unwrap_err(),
            ContentError::InvalidRating(0)
        );
        assert_eq!(
            Testimonial::from_draft(draft(6), meta.clone()).unwrap_err(),
            ContentError::InvalidRating(6)
        );
        assert_eq!(Testimonial::from_draft(draft(5), meta).unwrap().rating(), 5);
    }
}
