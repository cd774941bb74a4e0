use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quest_core::model::Identity;
use quest_core::time::fixed_now;
use services::{AdventureService, AppServices, Clock, ContentServices};

use crate::context::{UiApp, build_app_context};
use crate::views::{AdminView, AdventureView, BadgesView, BlogView, HomeView, ZoneView};

#[derive(Clone)]
struct TestApp {
    clock: Clock,
    identity: Identity,
    services: AppServices,
}

impl UiApp for TestApp {
    fn clock(&self) -> Clock {
        self.clock
    }

    fn identity(&self) -> Identity {
        self.identity.clone()
    }

    fn adventure(&self) -> Arc<AdventureService> {
        self.services.adventure()
    }

    fn content(&self) -> ContentServices {
        self.services.content().clone()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Blog,
    Adventure,
    Zone(&'static str),
    Badges,
    Admin,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Blog => rsx! { BlogView {} },
        ViewKind::Adventure => rsx! { AdventureView {} },
        ViewKind::Zone(zone_id) => rsx! { ZoneView { zone_id: zone_id.to_string() } },
        ViewKind::Badges => rsx! { BadgesView {} },
        ViewKind::Admin => rsx! { AdminView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub services: AppServices,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Services are shared with the harness so tests can seed data before the first render.
pub async fn setup_view_harness(view: ViewKind, identity: Identity) -> ViewHarness {
    let clock = Clock::fixed(fixed_now());
    let services = AppServices::in_memory(clock).await;

    let app = Arc::new(TestApp {
        clock,
        identity,
        services: services.clone(),
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });

    ViewHarness { dom, services }
}
