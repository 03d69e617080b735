use dioxus::prelude::*;
use types::Role;

#[component]
pub fn Login(error: Option<String>) -> Element {
    let roles = [
        Role::Admin,
        Role::HiringManager,
        Role::TalentManager,
        Role::Candidate,
    ];

    rsx! {
        div { class: "login-page",
            div { class: "login-card",
                div { class: "login-header",
                    h1 { class: "login-title", "RecruitOps" }
                    p { class: "login-subtitle", "Consultant and hiring tracker" }
                }
                if let Some(err) = error {
                    div { class: "alert alert-error", "{err}" }
                }
                for role in roles {
                    {
                        let label = format!("Sign in as {}", role.label());
                        rsx! {
                            form {
                                key: "{role}",
                                action: "/auth/demo-login",
                                method: "get",
                                input { r#type: "hidden", name: "role", value: "{role}" }
                                button {
                                    r#type: "submit",
                                    class: "btn btn-primary login-btn",
                                    "{label}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
