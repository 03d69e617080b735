use serde::{Deserialize, Serialize};

use crate::Role;

pub type JobId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStatus {
    Active,
    Closed,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Active => "Active",
            JobStatus::Closed => "Closed",
        }
    }
}

/// A job posted by the signed-in hiring manager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSummary {
    pub id: JobId,
    pub title: String,
    pub applicants: u32,
    pub posted: String,
    pub status: JobStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchedCandidate {
    pub name: String,
    pub role: String,
    pub stage: String,
}

impl WatchedCandidate {
    pub fn initial(&self) -> String {
        initial_of(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Consultant {
    pub id: u32,
    pub name: String,
    pub title: String,
    pub email: String,
    pub status: String,
}

impl Consultant {
    pub fn initial(&self) -> String {
        initial_of(&self.name)
    }

    pub fn is_active(&self) -> bool {
        self.status == "Active"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: u32,
    pub job_id: JobId,
    pub candidate: String,
    pub client: String,
    pub stage: String,
    pub submitted_on: String,
}

/// Submissions for one job, or all of them.
pub fn submissions_for(submissions: &[Submission], job_id: Option<JobId>) -> Vec<Submission> {
    submissions
        .iter()
        .filter(|s| job_id.is_none_or(|id| s.job_id == id))
        .cloned()
        .collect()
}

/// A job the signed-in candidate applied to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: u32,
    pub role: String,
    pub company: String,
    pub location: String,
    pub status: String,
    pub applied: String,
}

/// A row in the admin user directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryUser {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub active: bool,
    pub last_login: String,
}

/// Case-insensitive search over name and email. An empty query keeps everyone.
pub fn search_users<'a>(users: &'a [DirectoryUser], query: &str) -> Vec<&'a DirectoryUser> {
    let query = query.trim().to_lowercase();

    users
        .iter()
        .filter(|u| {
            query.is_empty()
                || u.name.to_lowercase().contains(&query)
                || u.email.to_lowercase().contains(&query)
        })
        .collect()
}

/// Change one user's role. Returns false when no user has that id.
pub fn assign_role(users: &mut [DirectoryUser], id: u32, role: Role) -> bool {
    match users.iter_mut().find(|u| u.id == id) {
        Some(user) => {
            user.role = role;
            true
        }
        None => false,
    }
}

fn initial_of(name: &str) -> String {
    name.chars()
        .next()
        .unwrap_or('?')
        .to_uppercase()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;
    use pretty_assertions::assert_eq;

    #[test]
    fn search_matches_name_or_email() {
        let users = mock::directory_users();

        let names: Vec<_> = search_users(&users, "SARAH")
            .iter()
            .map(|u| u.name.as_str())
            .collect();
        assert_eq!(names, vec!["Sarah Recruiter"]);

        let names: Vec<_> = search_users(&users, "gmail")
            .iter()
            .map(|u| u.name.as_str())
            .collect();
        assert_eq!(names, vec!["John Candidate"]);
    }

    #[test]
    fn blank_search_keeps_everyone() {
        let users = mock::directory_users();
        assert_eq!(search_users(&users, "  ").len(), users.len());
    }

    #[test]
    fn assigning_a_role_touches_one_user() {
        let mut users = mock::directory_users();

        assert!(assign_role(&mut users, 3, Role::TalentManager));
        assert_eq!(users[2].role, Role::TalentManager);
        assert_eq!(users[3].role, Role::Candidate);

        let before = users.clone();
        assert!(!assign_role(&mut users, 42, Role::Admin));
        assert_eq!(users, before);
    }

    #[test]
    fn submissions_filter_by_job() {
        let all = mock::submissions();
        let for_first = submissions_for(&all, Some(1));

        assert!(!for_first.is_empty());
        assert!(for_first.iter().all(|s| s.job_id == 1));
        assert_eq!(submissions_for(&all, None), all);
    }

    #[test]
    fn initials() {
        let consultant = &mock::consultants()[0];
        assert_eq!(consultant.initial(), "J");
    }
}
