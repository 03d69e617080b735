//! Placeholder figures and collections standing in for backend data.

use crate::{
    AdminStats, Application, Availability, BenchConsultant, Consultant, DirectoryUser, JobStatus,
    JobSummary, RecruiterStats, Role, Submission, SystemLoad, WatchedCandidate,
};

pub const ADMIN_STATS: AdminStats = AdminStats {
    total_users: 1240,
    system_load: SystemLoad::Normal,
    jobs_posted: 85,
};

pub const RECRUITER_STATS: RecruiterStats = RecruiterStats {
    active_jobs: 12,
    total_applicants: 148,
    interviews: 8,
    hires: 3,
};

pub fn posted_jobs() -> Vec<JobSummary> {
    vec![
        JobSummary {
            id: 1,
            title: "Senior React Developer".into(),
            applicants: 12,
            posted: "2 days ago".into(),
            status: JobStatus::Active,
        },
        JobSummary {
            id: 2,
            title: "Backend Engineer (Go)".into(),
            applicants: 8,
            posted: "5 days ago".into(),
            status: JobStatus::Active,
        },
        JobSummary {
            id: 3,
            title: "Product Designer".into(),
            applicants: 24,
            posted: "2 weeks ago".into(),
            status: JobStatus::Closed,
        },
    ]
}

pub fn candidates_to_watch() -> [WatchedCandidate; 3] {
    [
        WatchedCandidate {
            name: "Alice Johnson".into(),
            role: "Frontend Developer".into(),
            stage: "Technical Round".into(),
        },
        WatchedCandidate {
            name: "Bob Smith".into(),
            role: "Backend Engineer".into(),
            stage: "HR Round".into(),
        },
        WatchedCandidate {
            name: "Charlie Brown".into(),
            role: "Project Manager".into(),
            stage: "Offer".into(),
        },
    ]
}

pub fn consultants() -> Vec<Consultant> {
    vec![
        Consultant {
            id: 1,
            name: "John Smith".into(),
            title: "React Developer".into(),
            email: "john@example.com".into(),
            status: "Active".into(),
        },
        Consultant {
            id: 2,
            name: "Sarah Johnson".into(),
            title: "Python Engineer".into(),
            email: "sarah@example.com".into(),
            status: "On Project".into(),
        },
        Consultant {
            id: 3,
            name: "Michael Chen".into(),
            title: "Java Architect".into(),
            email: "michael@example.com".into(),
            status: "Active".into(),
        },
    ]
}

pub fn submissions() -> Vec<Submission> {
    vec![
        Submission {
            id: 101,
            job_id: 1,
            candidate: "Alice Johnson".into(),
            client: "TechCorp".into(),
            stage: "Technical Round".into(),
            submitted_on: "2023-10-01".into(),
        },
        Submission {
            id: 102,
            job_id: 2,
            candidate: "Bob Smith".into(),
            client: "InnoSoft".into(),
            stage: "HR Round".into(),
            submitted_on: "2023-10-05".into(),
        },
        Submission {
            id: 103,
            job_id: 1,
            candidate: "Charlie Brown".into(),
            client: "TechCorp".into(),
            stage: "Submitted".into(),
            submitted_on: "2023-10-07".into(),
        },
    ]
}

pub fn applications() -> Vec<Application> {
    vec![
        Application {
            id: 1,
            role: "Senior React Developer".into(),
            company: "TechCorp Inc.".into(),
            location: "Remote".into(),
            status: "Interviewing".into(),
            applied: "Applied 2 days ago".into(),
        },
        Application {
            id: 2,
            role: "Full Stack Engineer".into(),
            company: "FinanceHub".into(),
            location: "New York, NY".into(),
            status: "Submitted".into(),
            applied: "Applied 1 week ago".into(),
        },
        Application {
            id: 3,
            role: "Frontend Lead".into(),
            company: "StartupX".into(),
            location: "San Francisco, CA".into(),
            status: "Rejected".into(),
            applied: "Applied 2 weeks ago".into(),
        },
    ]
}

pub fn directory_users() -> Vec<DirectoryUser> {
    let user = |id, name: &str, email: &str, role, active, last_login: &str| DirectoryUser {
        id,
        name: name.into(),
        email: email.into(),
        role,
        active,
        last_login: last_login.into(),
    };

    vec![
        user(1, "Admin User", "admin@recruitops.com", Role::Admin, true, "2 mins ago"),
        user(2, "Sarah Recruiter", "sarah@recruitops.com", Role::TalentManager, true, "1 hour ago"),
        user(3, "John Candidate", "john@gmail.com", Role::Candidate, true, "2 days ago"),
        user(4, "Jane Smith", "jane@yahoo.com", Role::Candidate, false, "1 month ago"),
        user(5, "Mike Manager", "mike@recruitops.com", Role::HiringManager, true, "5 hours ago"),
    ]
}

pub fn bench() -> Vec<BenchConsultant> {
    let consultant = |id, name: &str, years, tech: [&str; 4], visa: &str, rating, availability| {
        BenchConsultant {
            id,
            name: name.into(),
            years_experience: years,
            tech: tech.into_iter().map(String::from).collect(),
            visa: visa.into(),
            rating,
            availability,
        }
    };

    vec![
        consultant(1, "John Smith", 8, ["React", "Node.js", "TypeScript", "AWS"], "H1B", 5, Availability::Available),
        consultant(2, "Sarah Johnson", 6, ["Python", "AWS", "Docker", "Kubernetes"], "Green Card", 4, Availability::Unavailable),
        consultant(3, "Michael Chen", 10, ["Java", "Spring Boot", "PostgreSQL", "Azure"], "Citizen", 5, Availability::Available),
        consultant(4, "Emily Davis", 4, ["Angular", "TypeScript", ".NET", "Azure"], "OPT", 4, Availability::Unavailable),
        consultant(5, "David Wilson", 7, ["React", "Go", "MongoDB", "Docker"], "H1B", 4, Availability::Available),
    ]
}
