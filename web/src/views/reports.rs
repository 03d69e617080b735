use dioxus::prelude::*;

#[component]
pub fn Reports() -> Element {
    rsx! {
        div {
            div { class: "page-header",
                h1 { class: "page-title", "Reports" }
                p { class: "page-subtitle", "Analytics module coming soon." }
            }
        }
    }
}
