use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        div { class: "not-found-page",
            h1 { class: "not-found-code", "404" }
            p { class: "not-found-message", "Page not found: {path}" }
            Link { to: Route::Dashboard {}, "Go back home" }
        }
    }
}
