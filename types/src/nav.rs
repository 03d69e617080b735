use std::fmt;

use crate::{Access, JobId, Role};

/// A client-side destination, independent of the router that serves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppPath {
    Login,
    Dashboard,
    AdminUsers,
    NewJob,
    Reports,
    Submissions { job_id: Option<JobId> },
    MyCandidates,
    Consultants,
    Availability,
    CandidateDashboard,
}

impl AppPath {
    pub fn submissions_for(job_id: JobId) -> Self {
        AppPath::Submissions {
            job_id: Some(job_id),
        }
    }

    pub fn required_access(&self) -> Access {
        match self {
            AppPath::Login
            | AppPath::Dashboard
            | AppPath::Availability
            | AppPath::CandidateDashboard => Access::Any,
            AppPath::AdminUsers => Access::AdminOnly,
            AppPath::NewJob
            | AppPath::Reports
            | AppPath::Submissions { .. }
            | AppPath::MyCandidates
            | AppPath::Consultants => Access::Staff,
        }
    }
}

impl fmt::Display for AppPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppPath::Login => f.write_str("/login"),
            AppPath::Dashboard => f.write_str("/dashboard"),
            AppPath::AdminUsers => f.write_str("/admin/users"),
            AppPath::NewJob => f.write_str("/jobs/new"),
            AppPath::Reports => f.write_str("/reports"),
            AppPath::Submissions { job_id: None } => f.write_str("/submissions"),
            AppPath::Submissions {
                job_id: Some(job_id),
            } => write!(f, "/submissions?jobId={job_id}"),
            AppPath::MyCandidates => f.write_str("/hiring/my-candidates"),
            AppPath::Consultants => f.write_str("/candidates"),
            AppPath::Availability => f.write_str("/availability"),
            AppPath::CandidateDashboard => f.write_str("/candidate/dashboard"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub path: AppPath,
}

const STAFF_MENU: [MenuItem; 5] = [
    MenuItem {
        label: "Dashboard",
        path: AppPath::Dashboard,
    },
    MenuItem {
        label: "Consultants",
        path: AppPath::Consultants,
    },
    MenuItem {
        label: "Submissions",
        path: AppPath::Submissions { job_id: None },
    },
    MenuItem {
        label: "Availability",
        path: AppPath::Availability,
    },
    MenuItem {
        label: "Reports",
        path: AppPath::Reports,
    },
];

const CANDIDATE_MENU: [MenuItem; 2] = [
    MenuItem {
        label: "My Dashboard",
        path: AppPath::CandidateDashboard,
    },
    MenuItem {
        label: "Calendar",
        path: AppPath::Availability,
    },
];

const ADMIN_EXTRA: MenuItem = MenuItem {
    label: "User Management",
    path: AppPath::AdminUsers,
};

/// Sidebar entries for a role. Every entry is reachable by that role.
pub fn menu_for(role: &Role) -> Vec<MenuItem> {
    let mut items = if role.is_staff() {
        STAFF_MENU.to_vec()
    } else {
        CANDIDATE_MENU.to_vec()
    };

    if role.is_admin() {
        items.push(ADMIN_EXTRA);
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn paths_render_as_routes() {
        assert_eq!(AppPath::AdminUsers.to_string(), "/admin/users");
        assert_eq!(AppPath::NewJob.to_string(), "/jobs/new");
        assert_eq!(AppPath::Reports.to_string(), "/reports");
        assert_eq!(AppPath::submissions_for(7).to_string(), "/submissions?jobId=7");
        assert_eq!(AppPath::MyCandidates.to_string(), "/hiring/my-candidates");
        assert_eq!(AppPath::CandidateDashboard.to_string(), "/candidate/dashboard");
        assert_eq!(AppPath::Availability.to_string(), "/availability");
    }

    #[test]
    fn candidate_menu_has_no_staff_pages() {
        let labels: Vec<_> = menu_for(&Role::Candidate)
            .iter()
            .map(|item| item.label)
            .collect();
        assert_eq!(labels, vec!["My Dashboard", "Calendar"]);
    }

    #[test]
    fn availability_is_shared_by_every_role() {
        for role in [Role::Admin, Role::TalentManager, Role::Candidate] {
            assert!(
                menu_for(&role)
                    .iter()
                    .any(|item| item.path == AppPath::Availability),
                "{role}"
            );
        }
    }

    #[test]
    fn only_admins_see_user_management() {
        assert!(menu_for(&Role::Admin).contains(&ADMIN_EXTRA));
        assert!(!menu_for(&Role::TalentManager).contains(&ADMIN_EXTRA));
    }

    #[test]
    fn menu_entries_are_accessible() {
        for role in [
            Role::Admin,
            Role::HiringManager,
            Role::TalentManager,
            Role::Candidate,
            Role::Unrecognized("ops".into()),
        ] {
            for item in menu_for(&role) {
                assert!(
                    role.can_access(item.path.required_access()),
                    "{role} cannot open {}",
                    item.path
                );
            }
        }
    }
}
