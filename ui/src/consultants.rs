use dioxus::prelude::*;
use types::Consultant;

#[component]
pub fn ConsultantList(consultants: Vec<Consultant>) -> Element {
    if consultants.is_empty() {
        return rsx! {
            div { class: "empty-state", "No consultants yet." }
        };
    }

    rsx! {
        div { class: "consultant-list",
            for consultant in consultants {
                {
                    let initial = consultant.initial();
                    let badge = if consultant.is_active() {
                        "badge badge-active"
                    } else {
                        "badge"
                    };

                    rsx! {
                        div { key: "{consultant.id}", class: "card consultant-card",
                            div { class: "avatar", "{initial}" }
                            div { class: "consultant-info",
                                h3 { class: "consultant-name", "{consultant.name}" }
                                p { class: "consultant-title", "{consultant.title}" }
                            }
                            div { class: "consultant-contact", "{consultant.email}" }
                            span { class: badge, "{consultant.status}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render;
    use types::mock;

    fn app(consultants: Vec<Consultant>) -> Element {
        rsx! { ConsultantList { consultants } }
    }

    #[test]
    fn one_card_per_consultant() {
        let html = render(app, mock::consultants());

        assert_eq!(html.matches("consultant-card").count(), 3);
        assert!(html.contains("Michael Chen"));
        assert!(html.contains(r#"<div class="avatar">S</div>"#), "{html}");
    }

    #[test]
    fn only_active_consultants_get_the_green_badge() {
        let html = render(app, mock::consultants());
        assert_eq!(html.matches("badge badge-active").count(), 2);
    }

    #[test]
    fn empty_pool() {
        let html = render(app, Vec::new());
        assert!(html.contains("No consultants yet."));
    }
}
