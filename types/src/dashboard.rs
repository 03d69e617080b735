use crate::{AppPath, Role, User};

/// Which dashboard variant a render pass shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardView {
    /// No signed-in user; the route guard upstream deals with it.
    Empty,
    AdminOverview,
    RecruiterDashboard,
    /// Candidates (and roles we don't know) get sent to their own page.
    CandidateRedirect,
}

impl DashboardView {
    pub fn select(user: Option<&User>) -> Self {
        let Some(user) = user else {
            return DashboardView::Empty;
        };

        match &user.role {
            Role::Admin => DashboardView::AdminOverview,
            Role::HiringManager | Role::TalentManager => DashboardView::RecruiterDashboard,
            Role::Candidate | Role::Unrecognized(_) => DashboardView::CandidateRedirect,
        }
    }

    /// Where this view sends the user once it has rendered, if anywhere.
    pub fn redirect(&self) -> Option<AppPath> {
        match self {
            DashboardView::CandidateRedirect => Some(AppPath::CandidateDashboard),
            _ => None,
        }
    }
}

/// A latch that lets an action through exactly once.
#[derive(Debug, Default)]
pub struct OneShot {
    fired: bool,
}

impl OneShot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true the first time it is called, false ever after.
    pub fn fire(&mut self) -> bool {
        !std::mem::replace(&mut self.fired, true)
    }
}

/// Per-mount dispatcher state: the view choice itself is stateless, only the
/// post-render redirect is latched.
#[derive(Debug, Default)]
pub struct Dispatcher {
    redirect: OneShot,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called after each render with the view that was shown. Yields the
    /// navigation to perform, at most once over the dispatcher's lifetime.
    pub fn after_render(&mut self, view: DashboardView) -> Option<AppPath> {
        let path = view.redirect()?;
        self.redirect.fire().then_some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use uuid::Uuid;

    fn user(tag: &str) -> User {
        User {
            id: Uuid::nil(),
            name: "Test User".into(),
            email: "test@example.com".into(),
            role: Role::from_tag(tag),
        }
    }

    #[test]
    fn no_user_renders_nothing() {
        assert_eq!(DashboardView::select(None), DashboardView::Empty);
        assert_eq!(Dispatcher::new().after_render(DashboardView::Empty), None);
    }

    #[test]
    fn admin_in_any_case() {
        for tag in ["admin", "ADMIN", "Admin", "aDmIn"] {
            assert_eq!(
                DashboardView::select(Some(&user(tag))),
                DashboardView::AdminOverview,
                "{tag}"
            );
        }
    }

    #[test]
    fn hiring_and_talent_managers() {
        for tag in ["hiring_manager", "HIRING_MANAGER", "talent_manager", "Talent_Manager"] {
            assert_eq!(
                DashboardView::select(Some(&user(tag))),
                DashboardView::RecruiterDashboard,
                "{tag}"
            );
        }
    }

    #[test]
    fn everyone_else_is_redirected() {
        for tag in ["", "candidate", "CANDIDATE", "recruiter", "admin ", "hiring-manager"] {
            assert_eq!(
                DashboardView::select(Some(&user(tag))),
                DashboardView::CandidateRedirect,
                "{tag:?}"
            );
        }
    }

    #[test]
    fn candidate_redirect_fires_once_per_mount() {
        let candidate = user("candidate");
        let mut dispatcher = Dispatcher::new();
        let mut navigations = Vec::new();

        for _ in 0..5 {
            let view = DashboardView::select(Some(&candidate));
            navigations.extend(dispatcher.after_render(view));
        }

        assert_eq!(navigations, vec![AppPath::CandidateDashboard]);
    }

    #[test]
    fn remount_fires_again() {
        let view = DashboardView::select(Some(&user("candidate")));

        assert!(Dispatcher::new().after_render(view).is_some());
        assert!(Dispatcher::new().after_render(view).is_some());
    }

    #[test]
    fn staff_views_never_navigate() {
        let mut dispatcher = Dispatcher::new();
        for tag in ["admin", "talent_manager", "hiring_manager"] {
            let view = DashboardView::select(Some(&user(tag)));
            assert_eq!(dispatcher.after_render(view), None);
        }
    }

    #[test]
    fn selection_is_idempotent() {
        let manager = user("talent_manager");
        let first = DashboardView::select(Some(&manager));
        let second = DashboardView::select(Some(&manager));
        assert_eq!(first, second);
    }

    #[test]
    fn one_shot_latches() {
        let mut latch = OneShot::new();
        assert!(latch.fire());
        assert!(!latch.fire());
        assert!(!latch.fire());
    }
}
