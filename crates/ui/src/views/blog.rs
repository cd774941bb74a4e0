use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{BlogPostVm, map_blog_posts};

#[component]
pub fn BlogView() -> Element {
    let ctx = use_context::<AppContext>();
    let posts = ctx.content().blog_posts;
    let now = ctx.now();

    let resource = use_resource(move || {
        let posts = posts.clone();
        async move {
            let items = posts.list(200).await.map_err(|err| ViewError::from(&err))?;
            Ok::<_, ViewError>(map_blog_posts(&items, now))
        }
    });

    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "page blog-page",
            h2 { "Blog" }
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
                ViewState::Ready(posts) => rsx! {
                    if posts.is_empty() {
                        p { "Nothing published yet." }
                    }
                    for post in posts {
                        PostCard { key: "{post.id}", post: post.clone() }
                    }
                },
            }
        }
    }
}

#[component]
fn PostCard(post: BlogPostVm) -> Element {
    rsx! {
        article { class: "post",
            h3 { "{post.title}" }
            p { class: "post-byline", "{post.byline}" }
            if !post.tags.is_empty() {
                ul { class: "post-tags",
                    for tag in post.tags.iter() {
                        li { class: "tag", "{tag}" }
                    }
                }
            }
            div { class: "post-body", dangerous_inner_html: "{post.body_html}" }
        }
    }
}
