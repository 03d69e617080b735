mod dashboard;
pub use dashboard::Dashboard;

mod login;
pub use login::Login;

mod users;
pub use users::AdminUsers;

mod consultants;
pub use consultants::Consultants;

mod availability;
pub use availability::Availability;

mod submissions;
pub use submissions::Submissions;

mod hiring;
pub use hiring::{MyCandidates, NewJob};

mod candidate;
pub use candidate::CandidateDashboard;

mod reports;
pub use reports::Reports;

mod not_found;
pub use not_found::NotFound;
