use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// Error type for parsing an ID from a string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    kind: &'static str,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {} from string", self.kind)
    }
}

impl std::error::Error for ParseIdError {}

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({:?})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(ParseIdError {
                        kind: stringify!($name),
                    });
                }
                Ok(Self(trimmed.to_owned()))
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Identifier of an adventure zone (an age-targeted track such as `5-8`).
    ZoneId
);

string_id!(
    /// Identifier of a single completable activity.
    ActivityId
);

string_id!(
    /// Identifier of an achievement badge.
    ///
    /// Kept as an opaque string so badges written by other app versions survive a round trip.
    AchievementId
);

string_id!(
    /// Opaque identifier of an admin-managed entity.
    EntityId
);

impl EntityId {
    /// Generate a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn zone_id_display() {
        let id = ZoneId::new("5-8");
        assert_eq!(id.to_string(), "5-8");
        assert_eq!(format!("{id:?}"), "ZoneId(\"5-8\")");
    }

    #[test]
    fn activity_id_from_str_trims() {
        let id: ActivityId = "  scratch-jr ".parse().unwrap();
        assert_eq!(id, ActivityId::new("scratch-jr"));
    }

    #[test]
    fn blank_id_is_rejected() {
        assert!("   ".parse::<ZoneId>().is_err());
        assert!("".parse::<EntityId>().is_err());
    }

    #[test]
    fn sets_can_be_queried_by_str() {
        let mut set = BTreeSet::new();
        set.insert(ActivityId::new("robot-dance"));
        assert!(set.contains("robot-dance"));
        assert!(!set.contains("color-quest"));
    }

    #[test]
    fn generated_entity_ids_are_unique() {
        let a = EntityId::generate();
        let b = EntityId::generate();
        assert_ne!(a, b);
        assert!(!a.as_str().is_empty());
    }

    #[test]
    fn ids_serialize_as_plain_strings() {
        let json = serde_json::to_string(&ZoneId::new("9-12")).unwrap();
        assert_eq!(json, "\"9-12\"");
    }
}
