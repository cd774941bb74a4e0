mod blog_post;
mod entity;
mod event;
mod fields;
mod media;
mod team_member;
mod testimonial;
mod user;

pub use blog_post::{BlogPost, BlogPostDraft};
pub use entity::{Entity, EntityKind, EntityMeta};
pub use event::{Event, EventDraft};
pub use fields::{ContentError, slugify};
pub use media::{MediaItem, MediaItemDraft, MediaKind};
pub use team_member::{TeamMember, TeamMemberDraft};
pub use testimonial::{Testimonial, TestimonialDraft};
pub use user::{User, UserDraft};
