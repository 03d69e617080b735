use dioxus::prelude::*;
use types::{DirectoryUser, Role, assign_role, search_users};

fn role_badge_class(role: &Role) -> &'static str {
    match role {
        Role::Admin => "badge badge-admin",
        Role::HiringManager | Role::TalentManager => "badge badge-manager",
        Role::Candidate | Role::Unrecognized(_) => "badge",
    }
}

/// Roles an admin can hand out from the directory, with their action labels.
const ROLE_ACTIONS: [(Role, &str); 3] = [
    (Role::Candidate, "Set as Candidate"),
    (Role::TalentManager, "Set as Talent Manager"),
    (Role::Admin, "Promote to Admin"),
];

/// Searchable table of every account. Role changes and removals only affect this view.
#[component]
pub fn UserDirectory(users: Vec<DirectoryUser>) -> Element {
    let mut query = use_signal(String::new);
    let mut rows = use_signal(move || users);

    let visible: Vec<DirectoryUser> = search_users(&rows.read(), &query.read())
        .into_iter()
        .cloned()
        .collect();
    let nothing_found = visible.is_empty();

    rsx! {
        div { class: "card",
            div { class: "card-header",
                input {
                    class: "form-input",
                    r#type: "search",
                    placeholder: "Search by name or email...",
                    value: "{query}",
                    oninput: move |e| query.set(e.value()),
                }
            }
            div { class: "table-container",
                table {
                    thead {
                        tr {
                            th { "Name" }
                            th { "Email" }
                            th { "Role" }
                            th { "Status" }
                            th { "Last Login" }
                            th {}
                        }
                    }
                    tbody {
                        for user in visible {
                            {
                                let id = user.id;
                                let badge = role_badge_class(&user.role);
                                let label = user.role.label().to_string();
                                let status = if user.active { "Active" } else { "Inactive" };
                                let actions: Vec<(Role, &str)> = ROLE_ACTIONS
                                    .into_iter()
                                    .filter(|(role, _)| *role != user.role)
                                    .collect();

                                rsx! {
                                    tr { key: "{id}",
                                        td { "{user.name}" }
                                        td { "{user.email}" }
                                        td { span { class: badge, "{label}" } }
                                        td { "{status}" }
                                        td { class: "text-muted", "{user.last_login}" }
                                        td { class: "row-actions",
                                            for (role, action) in actions {
                                                button {
                                                    key: "{action}",
                                                    class: "btn btn-secondary btn-sm",
                                                    onclick: move |_| {
                                                        tracing::info!(user_id = id, %role, "changing role");
                                                        assign_role(&mut rows.write(), id, role.clone());
                                                    },
                                                    "{action}"
                                                }
                                            }
                                            button {
                                                class: "btn btn-danger btn-sm",
                                                onclick: move |_| {
                                                    tracing::info!(user_id = id, "removing user from directory");
                                                    rows.write().retain(|u| u.id != id);
                                                },
                                                "Remove"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                if nothing_found {
                    div { class: "empty-state", "No users found." }
                }
            }
        }
    }
}
