use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{BadgeTileVm, map_badges};

#[component]
pub fn BadgesView() -> Element {
    let ctx = use_context::<AppContext>();
    let adventure = ctx.adventure();

    let resource = use_resource(move || {
        let adventure = adventure.clone();
        async move { Ok::<_, ViewError>(map_badges(&adventure.progress().await)) }
    });

    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "page badges-page",
            h2 { "Badges" }
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
                ViewState::Ready(tiles) => rsx! {
                    div { class: "badge-grid",
                        for tile in tiles {
                            BadgeTile { key: "{tile.id}", tile: tile.clone() }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn BadgeTile(tile: BadgeTileVm) -> Element {
    let status = if tile.unlocked { "Unlocked" } else { "Locked" };

    rsx! {
        div { class: if tile.unlocked { "badge badge--unlocked" } else { "badge badge--locked" },
            h3 { "{tile.title}" }
            if !tile.description.is_empty() {
                p { "{tile.description}" }
            }
            span { class: "badge-status", "{tile.source_label} · {status}" }
        }
    }
}
