#![forbid(unsafe_code)]

pub mod adventure;
pub mod app_services;
pub mod content_service;
pub mod error;

pub use quest_core::Clock;

pub use adventure::{ActivityOverview, AdventureService, ZoneOverview};
pub use app_services::AppServices;
pub use content_service::{ContentService, ContentServices};
pub use error::{AdventureError, AppServicesError, ContentServiceError};
