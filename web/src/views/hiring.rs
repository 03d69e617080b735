use dioxus::prelude::*;
use types::mock;

#[component]
pub fn NewJob() -> Element {
    rsx! {
        div {
            div { class: "page-header",
                h1 { class: "page-title", "Post a Job" }
                p { class: "page-subtitle", "Job posting is coming soon." }
            }
        }
    }
}

#[component]
pub fn MyCandidates() -> Element {
    let watchlist = mock::candidates_to_watch();

    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "My Candidates" }
                    p { class: "page-subtitle", "Candidates you are keeping an eye on." }
                }
            }
            div { class: "card",
                ul { class: "watch-list",
                    for (i, candidate) in watchlist.into_iter().enumerate() {
                        li { key: "{i}", class: "watch-row",
                            div { class: "watch-row-info",
                                p { class: "watch-row-name", "{candidate.name}" }
                                p { class: "watch-row-role", "{candidate.role}" }
                            }
                            span { class: "badge", "{candidate.stage}" }
                        }
                    }
                }
            }
        }
    }
}
