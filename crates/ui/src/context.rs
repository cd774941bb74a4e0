use std::sync::Arc;

use chrono::{DateTime, Utc};
use quest_core::model::Identity;
use services::{AdventureService, Clock, ContentServices};

/// What the composition root hands to the UI.
pub trait UiApp: Send + Sync {
    fn clock(&self) -> Clock;
    fn identity(&self) -> Identity;
    fn adventure(&self) -> Arc<AdventureService>;
    fn content(&self) -> ContentServices;
}

#[derive(Clone)]
pub struct AppContext {
    clock: Clock,
    identity: Identity,
    adventure: Arc<AdventureService>,
    content: ContentServices,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            clock: app.clock(),
            identity: app.identity(),
            adventure: app.adventure(),
            content: app.content(),
        }
    }

    /// Reference time for deciding what is published or upcoming.
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    #[must_use]
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    #[must_use]
    pub fn adventure(&self) -> Arc<AdventureService> {
        Arc::clone(&self.adventure)
    }

    #[must_use]
    pub fn content(&self) -> ContentServices {
        self.content.clone()
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
