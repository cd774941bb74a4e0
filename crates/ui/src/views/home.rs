use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{EventItemVm, ProgressSummaryVm, map_events, map_progress_summary};

#[derive(Clone, Debug, PartialEq)]
struct HomeData {
    progress: ProgressSummaryVm,
    events: Vec<EventItemVm>,
}

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let adventure = ctx.adventure();
    let events = ctx.content().events;
    let now = ctx.now();

    let resource = use_resource(move || {
        let adventure = adventure.clone();
        let events = events.clone();
        async move {
            let record = adventure.progress().await;
            let items = events
                .list(100)
                .await
                .map_err(|err| ViewError::from(&err))?;
            Ok::<_, ViewError>(HomeData {
                progress: map_progress_summary(&record),
                events: map_events(&items, now),
            })
        }
    });

    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "page home-page",
            header { class: "hero",
                h2 { "Code your own adventure" }
                p { "Free coding camps, clubs and challenges for ages 5 to 18." }
                Link { class: "btn btn-primary", to: Route::Adventure {}, "Start the adventure" }
            }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                        "Retry"
                    }
                },
                ViewState::Ready(data) => rsx! {
                    section { class: "stats",
                        div { class: "stat", span { class: "stat-value", "{data.progress.total_xp}" } span { "Total XP" } }
                        div { class: "stat", span { class: "stat-value", "{data.progress.completed}" } span { "Activities done" } }
                        div { class: "stat", span { class: "stat-value", "{data.progress.explored}" } span { "Zones explored" } }
                        div { class: "stat", span { "{data.progress.badges_label}" } }
                    }
                    section { class: "events",
                        h3 { "Upcoming events" }
                        if data.events.is_empty() {
                            p { "No events scheduled right now." }
                        } else {
                            ul {
                                for event in data.events {
                                    EventItem { key: "{event.id}", event: event.clone() }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn EventItem(event: EventItemVm) -> Element {
    rsx! {
        li { class: "event",
            strong { "{event.title}" }
            span { class: "event-when", " {event.when}" }
            span { class: "event-where", " · {event.location}" }
            if let Some(url) = event.registration_url.clone() {
                a { class: "event-register", href: "{url}", " Register" }
            }
        }
    }
}
