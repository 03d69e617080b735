use crate::use_current_user;
use dioxus::prelude::*;
use types::mock;

fn status_class(status: &str) -> &'static str {
    match status {
        "Interviewing" => "badge badge-interviewing",
        "Submitted" => "badge badge-submitted",
        "Rejected" => "badge badge-rejected",
        _ => "badge",
    }
}

#[component]
pub fn CandidateDashboard() -> Element {
    let current_user = use_current_user();
    let greeting = match current_user.get() {
        Some(user) => format!("Welcome back, {}.", user.name),
        None => "Welcome back.".to_string(),
    };
    let applications = mock::applications();

    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "My Applications" }
                    p { class: "page-subtitle", "{greeting} Track your applications and current opportunities." }
                }
            }
            div { class: "application-list",
                for application in applications {
                    {
                        let badge = status_class(&application.status);
                        rsx! {
                            div { key: "{application.id}", class: "card application-card",
                                div { class: "application-info",
                                    h3 { class: "application-role", "{application.role}" }
                                    p { class: "application-company", "{application.company} · {application.location}" }
                                    p { class: "text-muted", "{application.applied}" }
                                }
                                span { class: badge, "{application.status}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
