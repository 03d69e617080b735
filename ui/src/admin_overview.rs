use dioxus::prelude::*;
use types::{AdminStats, AppPath};

use crate::StatPanel;

#[component]
pub fn AdminOverview(stats: AdminStats, on_navigate: EventHandler<AppPath>) -> Element {
    rsx! {
        div { class: "dashboard dashboard-admin",
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Admin Overview" }
                    p { class: "page-subtitle", "Welcome back. Here is what's happening in RecruitOps today." }
                }
                div { class: "page-header-actions",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| on_navigate.call(AppPath::AdminUsers),
                        "Manage Users"
                    }
                }
            }
            StatPanel { tiles: stats.tiles().to_vec() }
        }
    }
}
