use dioxus::prelude::*;
use types::{AppPath, DashboardView, Dispatcher, Role, User, mock};

use crate::{AdminOverview, RecruiterDashboard};

/// Role-adaptive dashboard: renders the variant matching the user's role.
///
/// With no user this renders nothing; keeping anonymous visitors out is the
/// layout's job. Candidates, and roles we don't recognise, are shown a
/// placeholder and sent to `/candidate/dashboard` once per mount.
#[component]
pub fn RoleDashboard(user: ReadSignal<Option<User>>, on_navigate: EventHandler<AppPath>) -> Element {
    let mut dispatcher = use_signal(Dispatcher::new);

    use_effect(move || {
        let current = user.read();
        if let Some(User {
            role: Role::Unrecognized(tag),
            ..
        }) = current.as_ref()
        {
            tracing::warn!(role = %tag, "unrecognized role, treating as candidate");
        }

        let view = DashboardView::select(current.as_ref());
        drop(current);

        let redirect = dispatcher.write().after_render(view);
        if let Some(path) = redirect {
            tracing::debug!(%path, "redirecting from dashboard");
            on_navigate.call(path);
        }
    });

    let view = DashboardView::select(user.read().as_ref());

    match view {
        DashboardView::Empty => rsx! {},
        DashboardView::AdminOverview => rsx! {
            AdminOverview { stats: mock::ADMIN_STATS, on_navigate }
        },
        DashboardView::RecruiterDashboard => rsx! {
            RecruiterDashboard {
                stats: mock::RECRUITER_STATS,
                jobs: mock::posted_jobs(),
                watchlist: mock::candidates_to_watch(),
                on_navigate,
            }
        },
        DashboardView::CandidateRedirect => rsx! {
            div { class: "loading", "Redirecting..." }
        },
    }
}
