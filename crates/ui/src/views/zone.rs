use dioxus::prelude::*;
use dioxus_router::Link;
use quest_core::model::{ActivityId, ZoneId};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{ActivityRowVm, ZoneCardVm, map_activity_rows};

#[derive(Clone, Debug, PartialEq)]
struct ZoneData {
    card: ZoneCardVm,
    rows: Vec<ActivityRowVm>,
}

#[component]
pub fn ZoneView(zone_id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let adventure = ctx.adventure();
    let mut notice = use_signal(|| None::<ViewError>);

    let adventure_for_resource = adventure.clone();
    let zone_for_resource = zone_id.clone();
    let resource = use_resource(move || {
        let adventure = adventure_for_resource.clone();
        let zone_id = ZoneId::new(zone_for_resource.clone());
        async move {
            let overview = adventure
                .zone_overview(&zone_id)
                .await
                .map_err(|err| ViewError::from(&err))?;
            Ok::<_, ViewError>(ZoneData {
                card: ZoneCardVm::from(&overview),
                rows: map_activity_rows(&overview),
            })
        }
    });

    let state = view_state_from_resource(resource);

    let on_complete = use_callback(move |activity_id: String| {
        let adventure = adventure.clone();
        let zone_id = ZoneId::new(zone_id.clone());
        spawn(async move {
            match adventure
                .complete_activity(&zone_id, &ActivityId::new(activity_id))
                .await
            {
                Ok(_) => notice.set(None),
                Err(err) => notice.set(Some(ViewError::from(&err))),
            }
            let mut resource = resource;
            resource.restart();
        });
    });

    rsx! {
        div { class: "page zone-page",
            Link { class: "back-link", to: Route::Adventure {}, "← All zones" }
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
                ViewState::Ready(data) => rsx! {
                    header { class: "view-header",
                        h2 { class: "view-title", "{data.card.title}" }
                        p { class: "view-subtitle", "{data.card.tagline}" }
                        p { class: "zone-xp", "{data.card.xp_label}" }
                    }
                    ol { class: "activity-list",
                        for row in data.rows {
                            ActivityRow { key: "{row.id}", row: row.clone(), on_complete }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn ActivityRow(row: ActivityRowVm, on_complete: Callback<String>) -> Element {
    let activity_id = row.id.clone();

    rsx! {
        li { class: "activity {row.state_class}",
            div { class: "activity-main",
                span { class: "activity-title", "{row.title}" }
                span { class: "activity-meta", "{row.difficulty_label} · {row.xp_label}" }
            }
            span { class: "activity-state", "{row.state_label}" }
            button {
                class: "btn btn-primary",
                r#type: "button",
                disabled: !row.can_complete,
                onclick: move |_| on_complete.call(activity_id.clone()),
                "Complete"
            }
        }
    }
}
