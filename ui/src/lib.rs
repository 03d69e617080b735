//! Presentational components. Nothing in here knows about the router:
//! navigation is requested through `EventHandler<AppPath>` callbacks.

mod admin_overview;
mod availability;
mod consultants;
mod recruiter_dashboard;
mod role_dashboard;
mod stat_card;
mod user_directory;

pub use admin_overview::AdminOverview;
pub use availability::AvailabilityBoard;
pub use consultants::ConsultantList;
pub use recruiter_dashboard::RecruiterDashboard;
pub use role_dashboard::RoleDashboard;
pub use stat_card::{StatCard, StatPanel};
pub use user_directory::UserDirectory;

#[cfg(test)]
mod test_support {
    use dioxus::prelude::*;
    use dioxus_core::VirtualDom;

    /// Render a root component with props to static HTML.
    pub fn render<P: Clone + 'static>(app: fn(P) -> Element, props: P) -> String {
        let mut dom = VirtualDom::new_with_props(app, props);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }
}
