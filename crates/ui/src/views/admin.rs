use dioxus::prelude::*;
use quest_core::model::{EntityId, EntityKind, Identity};
use services::{ContentServiceError, ContentServices};

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{AdminRowVm, AdminSectionVm, map_admin_section};

const LIST_LIMIT: u32 = 200;

async fn load_sections(
    content: &ContentServices,
    identity: &Identity,
) -> Result<Vec<AdminSectionVm>, ContentServiceError> {
    let role = identity.role();
    Ok(vec![
        map_admin_section(&content.events.list(LIST_LIMIT).await?, role),
        map_admin_section(&content.blog_posts.list(LIST_LIMIT).await?, role),
        map_admin_section(&content.media.list(LIST_LIMIT).await?, role),
        map_admin_section(&content.testimonials.list(LIST_LIMIT).await?, role),
        map_admin_section(&content.team.list(LIST_LIMIT).await?, role),
        map_admin_section(&content.users.list(LIST_LIMIT).await?, role),
    ])
}

async fn delete_entity(
    content: &ContentServices,
    identity: &Identity,
    kind: EntityKind,
    id: &EntityId,
) -> Result<(), ContentServiceError> {
    match kind {
        EntityKind::Event => content.events.delete(identity, id).await,
        EntityKind::BlogPost => content.blog_posts.delete(identity, id).await,
        EntityKind::Media => content.media.delete(identity, id).await,
        EntityKind::Testimonial => content.testimonials.delete(identity, id).await,
        EntityKind::TeamMember => content.team.delete(identity, id).await,
        EntityKind::User => content.users.delete(identity, id).await,
    }
}

#[component]
pub fn AdminView() -> Element {
    let ctx = use_context::<AppContext>();
    let allowed = ctx.identity().role().can_access_admin();

    rsx! {
        div { class: "page admin-page",
            h2 { "Admin" }
            if allowed {
                AdminPanel {}
            } else {
                p { class: "notice", "{ViewError::Forbidden.message()}" }
            }
        }
    }
}

#[component]
fn AdminPanel() -> Element {
    let ctx = use_context::<AppContext>();
    let identity = ctx.identity().clone();
    let content = ctx.content();
    let mut notice = use_signal(|| None::<ViewError>);

    let content_for_resource = content.clone();
    let identity_for_resource = identity.clone();
    let resource = use_resource(move || {
        let content = content_for_resource.clone();
        let identity = identity_for_resource.clone();
        async move {
            load_sections(&content, &identity)
                .await
                .map_err(|err| ViewError::from(&err))
        }
    });

    let state = view_state_from_resource(resource);

    let on_delete = use_callback(move |(kind, id): (EntityKind, String)| {
        let content = content.clone();
        let identity = identity.clone();
        spawn(async move {
            match delete_entity(&content, &identity, kind, &EntityId::new(id)).await {
                Ok(()) => notice.set(None),
                Err(err) => notice.set(Some(ViewError::from(&err))),
            }
            let mut resource = resource;
            resource.restart();
        });
    });

    rsx! {
        div { class: "admin-panel",
            p { class: "admin-user", "Signed in as {ctx.identity().user()} ({ctx.identity().role().as_str()})" }
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
                ViewState::Ready(sections) => rsx! {
                    for section in sections {
                        AdminSection { key: "{section.kind}", section: section.clone(), on_delete }
                    }
                },
            }
        }
    }
}

#[component]
fn AdminSection(section: AdminSectionVm, on_delete: Callback<(EntityKind, String)>) -> Element {
    let kind = section.kind;

    rsx! {
        section { class: "admin-section",
            header { class: "admin-section-header",
                h3 { "{section.title}" }
                span { class: "admin-count", "{section.count_label()}" }
            }
            if section.rows.is_empty() {
                p { class: "admin-empty", "Nothing here yet." }
            } else {
                table { class: "admin-table",
                    tbody {
                        for row in section.rows.iter().cloned() {
                            AdminRow {
                                key: "{row.id}",
                                row: row.clone(),
                                kind,
                                can_manage: section.can_manage,
                                on_delete,
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn AdminRow(
    row: AdminRowVm,
    kind: EntityKind,
    can_manage: bool,
    on_delete: Callback<(EntityKind, String)>,
) -> Element {
    let id = row.id.clone();

    rsx! {
        tr {
            td { "{row.label}" }
            td { class: "admin-updated", "{row.updated_str}" }
            td {
                if can_manage {
                    button {
                        class: "btn btn-danger",
                        r#type: "button",
                        onclick: move |_| on_delete.call((kind, id.clone())),
                        "Delete"
                    }
                }
            }
        }
    }
}
