use dioxus::prelude::*;
use types::{
    BenchConsultant, ColorTheme, Icon, StatTile, count_availability, search_bench,
    toggle_availability,
};

use crate::StatPanel;

/// Bench board: search consultants and flip their availability. Changes stay in this view.
#[component]
pub fn AvailabilityBoard(consultants: Vec<BenchConsultant>) -> Element {
    let mut query = use_signal(String::new);
    let mut bench = use_signal(move || consultants);

    let counts = count_availability(&bench.read());
    let tiles = vec![
        StatTile::new("Available", counts.available.to_string())
            .icon(Icon::CheckCircle)
            .color(ColorTheme::Green),
        StatTile::new("On Project", counts.on_project.to_string()).icon(Icon::Briefcase),
    ];
    let visible: Vec<BenchConsultant> = search_bench(&bench.read(), &query.read())
        .into_iter()
        .cloned()
        .collect();
    let nothing_found = visible.is_empty();

    rsx! {
        StatPanel { tiles }
        div { class: "card-header",
            input {
                class: "form-input",
                r#type: "search",
                placeholder: "Search consultants...",
                value: "{query}",
                oninput: move |e| query.set(e.value()),
            }
        }
        div { class: "consultant-list",
            for consultant in visible {
                {
                    let id = consultant.id;
                    let initials = consultant.initials();
                    let status = consultant.availability.as_str();
                    let toggle = if consultant.is_available() {
                        "toggle toggle-on"
                    } else {
                        "toggle"
                    };
                    let stars = "★".repeat(consultant.rating.into());

                    rsx! {
                        div { key: "{id}", class: "card consultant-card",
                            div { class: "avatar", "{initials}" }
                            div { class: "consultant-info",
                                h3 { class: "consultant-name", "{consultant.name}" }
                                p { class: "consultant-title", "{consultant.years_experience} years exp" }
                            }
                            div { class: "tech-stack",
                                for tech in consultant.tech.iter() {
                                    span { key: "{tech}", class: "badge", "{tech}" }
                                }
                            }
                            div { class: "consultant-meta",
                                span { class: "text-muted", "{consultant.visa}" }
                                span { class: "rating", "{stars}" }
                            }
                            button {
                                class: toggle,
                                onclick: move |_| {
                                    let now = toggle_availability(&mut bench.write(), id);
                                    tracing::info!(consultant_id = id, ?now, "availability changed");
                                },
                                "{status}"
                            }
                        }
                    }
                }
            }
        }
        if nothing_found {
            div { class: "empty-state", "No consultants match your search." }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render;
    use types::mock;

    fn app(consultants: Vec<BenchConsultant>) -> Element {
        rsx! { AvailabilityBoard { consultants } }
    }

    #[test]
    fn shows_counts_and_every_consultant() {
        let html = render(app, mock::bench());

        assert!(html.contains(r#"<h3 class="stat-card-value">3</h3>"#), "{html}");
        assert!(html.contains(r#"<h3 class="stat-card-value">2</h3>"#));
        assert_eq!(html.matches("consultant-card").count(), 5);
        assert_eq!(html.matches("toggle toggle-on").count(), 3);
        assert!(html.contains(r#"<div class="avatar">SJ</div>"#));
        assert!(html.contains("Kubernetes"));
    }

    #[test]
    fn empty_bench() {
        let html = render(app, Vec::new());
        assert!(html.contains("No consultants match your search."));
    }
}
