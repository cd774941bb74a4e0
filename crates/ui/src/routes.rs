use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::context::AppContext;
use crate::views::{AdminView, AdventureView, BadgesView, BlogView, HomeView, ZoneView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/blog", BlogView)] Blog {},
        #[route("/adventure", AdventureView)] Adventure {},
        #[route("/adventure/:zone_id", ZoneView)] Zone { zone_id: String },
        #[route("/badges", BadgesView)] Badges {},
        #[route("/admin", AdminView)] Admin {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    let ctx = use_context::<AppContext>();
    let show_admin = ctx.identity().role().can_access_admin();

    rsx! {
        nav { class: "sidebar",
            h1 { "CodeQuest" }
            ul {
                li { Link { to: Route::Home {}, "Home" } }
                li { Link { to: Route::Blog {}, "Blog" } }
                li { Link { to: Route::Adventure {}, "Adventure" } }
                li { Link { to: Route::Badges {}, "Badges" } }
                if show_admin {
                    li { Link { to: Route::Admin {}, "Admin" } }
                }
            }
            p { class: "sidebar-user", "Signed in as {ctx.identity().user()}" }
        }
    }
}
