use dioxus::prelude::*;
use types::mock;
use ui::ConsultantList;

#[component]
pub fn Consultants() -> Element {
    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Consultants" }
                    p { class: "page-subtitle", "Manage your consultant pool" }
                }
            }
            ConsultantList { consultants: mock::consultants() }
        }
    }
}
