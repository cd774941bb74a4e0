use serde::{Deserialize, Serialize};

use crate::model::content::EntityKind;

/// Role string supplied by the identity provider, narrowed to what the back office understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Editor,
    #[default]
    Viewer,
}

impl Role {
    /// Parse a provider role string. Anything unrecognised is treated as `Viewer`.
    #[must_use]
    pub fn from_provider(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "admin" | "administrator" | "owner" => Role::Admin,
            "editor" | "staff" => Role::Editor,
            _ => Role::Viewer,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Editor => "editor",
            Role::Viewer => "viewer",
        }
    }

    /// Whether the back office should be shown at all.
    #[must_use]
    pub fn can_access_admin(self) -> bool {
        matches!(self, Role::Admin | Role::Editor)
    }

    /// Whether this role may create, edit or delete entities of `kind`.
    #[must_use]
    pub fn can_manage(self, kind: EntityKind) -> bool {
        match kind {
            EntityKind::User => self == Role::Admin,
            _ => self.can_access_admin(),
        }
    }
}

/// Signed-in user as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    user: String,
    role: Role,
}

impl Identity {
    #[must_use]
    pub fn new(user: impl Into<String>, role: Role) -> Self {
        Self {
            user: user.into(),
            role,
        }
    }

    #[must_use]
    pub fn anonymous() -> Self {
        Self::new("guest", Role::Viewer)
    }

    #[must_use]
    pub fn user(&self) -> &str {
        &self.user
    }

    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_roles_map_case_insensitively() {
        assert_eq!(Role::from_provider("Admin"), Role::Admin);
        assert_eq!(Role::from_provider(" editor "), Role::Editor);
        assert_eq!(Role::from_provider("parent"), Role::Viewer);
        assert_eq!(Role::from_provider(""), Role::Viewer);
    }

    #[test]
    fn only_admins_manage_users() {
        assert!(Role::Admin.can_manage(EntityKind::User));
        assert!(!Role::Editor.can_manage(EntityKind::User));
        assert!(Role::Editor.can_manage(EntityKind::BlogPost));
        assert!(!Role::Viewer.can_manage(EntityKind::Event));
    }
}
