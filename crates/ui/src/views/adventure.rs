use dioxus::prelude::*;
use dioxus_router::use_navigator;
use quest_core::model::ZoneId;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{ZoneCardVm, map_zone_cards};

#[component]
pub fn AdventureView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let adventure = ctx.adventure();
    let mut notice = use_signal(|| None::<ViewError>);

    let adventure_for_resource = adventure.clone();
    let resource = use_resource(move || {
        let adventure = adventure_for_resource.clone();
        async move { Ok::<_, ViewError>(map_zone_cards(&adventure.overviews().await)) }
    });

    let state = view_state_from_resource(resource);

    let adventure_for_explore = adventure.clone();
    let on_explore = use_callback(move |zone_id: String| {
        let adventure = adventure_for_explore.clone();
        spawn(async move {
            match adventure.explore_zone(&ZoneId::new(zone_id.clone())).await {
                Ok(_) => {
                    notice.set(None);
                    let _ = navigator.push(Route::Zone { zone_id });
                }
                Err(err) => notice.set(Some(ViewError::from(&err))),
            }
        });
    });

    let on_reset = move |_| {
        let adventure = adventure.clone();
        spawn(async move {
            adventure.reset_progress().await;
            notice.set(None);
            let mut resource = resource;
            resource.restart();
        });
    };

    rsx! {
        div { class: "page adventure-page",
            header { class: "view-header",
                h2 { class: "view-title", "Choose your zone" }
                p { class: "view-subtitle", "Every zone is a track for a different age group." }
            }
            if let Some(err) = notice() {
                p { class: "notice", "{err.message()}" }
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
                },
                ViewState::Ready(cards) => rsx! {
                    div { class: "zone-grid",
                        for card in cards {
                            ZoneCard {
                                key: "{card.id}",
                                card: card.clone(),
                                on_explore,
                            }
                        }
                    }
                },
            }
            footer { class: "view-footer",
                button {
                    class: "btn btn-danger",
                    r#type: "button",
                    onclick: on_reset,
                    "Reset progress"
                }
            }
        }
    }
}

#[component]
fn ZoneCard(card: ZoneCardVm, on_explore: Callback<String>) -> Element {
    let zone_id = card.id.clone();
    let cta = if card.explored { "Continue" } else { "Explore" };

    rsx! {
        div { class: if card.explored { "zone-card zone-card--explored" } else { "zone-card" },
            h3 { "{card.title}" }
            p { class: "zone-tagline", "{card.tagline}" }
            div { class: "progress",
                div { class: "progress-bar", style: "width: {card.progress_pct}%" }
            }
            p { class: "zone-xp", "{card.xp_label}" }
            p { class: "zone-count", "{card.completed_label}" }
            button {
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |_| on_explore.call(zone_id.clone()),
                "{cta}"
            }
        }
    }
}
