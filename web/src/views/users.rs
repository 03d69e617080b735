use dioxus::prelude::*;
use types::mock;
use ui::UserDirectory;

#[component]
pub fn AdminUsers() -> Element {
    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "User Management" }
                    p { class: "page-subtitle", "Manage user access, roles and account status." }
                }
            }
            UserDirectory { users: mock::directory_users() }
        }
    }
}
