use dioxus::prelude::*;
use types::mock;
use ui::AvailabilityBoard;

#[component]
pub fn Availability() -> Element {
    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Availability Management" }
                    p { class: "page-subtitle", "Manage consultant availability status" }
                }
            }
            AvailabilityBoard { consultants: mock::bench() }
        }
    }
}
