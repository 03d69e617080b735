use crate::{Route, use_current_user};
use dioxus::prelude::*;
use types::AppPath;
use ui::RoleDashboard;

#[component]
pub fn Dashboard() -> Element {
    let current_user = use_current_user();

    rsx! {
        RoleDashboard {
            user: current_user.get(),
            on_navigate: move |path: AppPath| {
                let nav = navigator();
                match path {
                    // Leaving the dashboard for the candidate page shouldn't leave
                    // a history entry that bounces straight back.
                    AppPath::CandidateDashboard => {
                        nav.replace(Route::from(path));
                    }
                    _ => {
                        nav.push(Route::from(path));
                    }
                }
            },
        }
    }
}
