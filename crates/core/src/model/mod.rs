mod achievement;
mod catalog;
pub mod content;
mod ids;
mod progress;
mod role;

pub use achievement::Achievement;
pub use catalog::{
    Activity, ActivityState, Catalog, CatalogError, Difficulty, Zone, standard_zones,
};
pub use content::{
    BlogPost, BlogPostDraft, ContentError, Entity, EntityKind, EntityMeta, Event, EventDraft,
    MediaItem, MediaItemDraft, MediaKind, TeamMember, TeamMemberDraft, Testimonial,
    TestimonialDraft, User, UserDraft,
};
pub use ids::{AchievementId, ActivityId, EntityId, ParseIdError, ZoneId};
pub use progress::{ProgressRecord, Reconciliation, xp_from_completed};
pub use role::{Identity, Role};
