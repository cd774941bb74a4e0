use serde::{Deserialize, Serialize};

use crate::model::content::fields::{TITLE_MAX, required, validate_email};
use crate::model::content::{ContentError, Entity, EntityKind, EntityMeta};
use crate::model::role::Role;

/// A back-office account. Credentials live with the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(flatten)]
    meta: EntityMeta,
    name: String,
    email: String,
    role: Role,
    active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub active: bool,
}

impl Entity for User {
    const KIND: EntityKind = EntityKind::User;
    type Draft = UserDraft;

    fn from_draft(draft: UserDraft, meta: EntityMeta) -> Result<Self, ContentError> {
        Ok(Self {
            meta,
            name: required("name", &draft.name, TITLE_MAX)?,
            email: validate_email(&draft.email)?,
            role: draft.role,
            active: draft.active,
        })
    }

    fn meta(&self) -> &EntityMeta {
        &self.meta
    }

    fn label(&self) -> &str {
        &self.name
    }
}

impl User {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }
}
