//! Adventure: zones, activities and badges.

pub mod rules;
mod service;
mod view;

pub use service::AdventureService;
pub use view::{ActivityOverview, ZoneOverview};
