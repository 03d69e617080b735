mod availability;
mod dashboard;
mod error;
pub mod mock;
mod nav;
mod records;
mod role;
mod session;
mod stats;

pub use availability::{
    Availability, AvailabilityCounts, BenchConsultant, count_availability, search_bench,
    toggle_availability,
};
pub use dashboard::{DashboardView, Dispatcher, OneShot};
pub use error::{Error, Result};
pub use nav::{AppPath, MenuItem, menu_for};
pub use records::{
    Application, Consultant, DirectoryUser, JobId, JobStatus, JobSummary, Submission,
    WatchedCandidate, assign_role, search_users, submissions_for,
};
pub use role::{Access, Role};
pub use session::{SESSION_COOKIE_NAME, User, UserSession};
pub use stats::{
    AdminStats, ColorTheme, Icon, RecruiterStats, StatTile, SystemLoad, group_thousands,
};

// FIXME: We can do this better I think.
#[doc(hidden)]
pub use anyhow::anyhow as internal_anyhow_dont_use;
