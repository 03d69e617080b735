use dioxus::prelude::*;
use types::{AppPath, JobStatus, JobSummary, RecruiterStats, WatchedCandidate};

use crate::StatPanel;

#[component]
pub fn RecruiterDashboard(
    stats: RecruiterStats,
    jobs: Vec<JobSummary>,
    watchlist: [WatchedCandidate; 3],
    on_navigate: EventHandler<AppPath>,
) -> Element {
    rsx! {
        div { class: "dashboard dashboard-recruiter",
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Recruiter Dashboard" }
                    p { class: "page-subtitle", "Manage your job postings and track candidates." }
                }
                div { class: "page-header-actions",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| on_navigate.call(AppPath::Reports),
                        "Reports"
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| on_navigate.call(AppPath::NewJob),
                        "Post New Job"
                    }
                }
            }

            StatPanel { tiles: stats.tiles().to_vec() }

            div { class: "grid grid-cols-2",
                div { class: "card",
                    div { class: "card-header",
                        h2 { class: "card-title", "My Posted Jobs" }
                    }
                    ul { class: "job-list",
                        for job in jobs {
                            JobRow { key: "{job.id}", job: job.clone(), on_navigate }
                        }
                    }
                }
                div { class: "card",
                    div { class: "card-header",
                        h2 { class: "card-title", "Candidates to Watch" }
                    }
                    ul { class: "watch-list",
                        for (i, candidate) in watchlist.into_iter().enumerate() {
                            {
                                let initial = candidate.initial();
                                rsx! {
                                    li {
                                        key: "{i}",
                                        class: "watch-row",
                                        onclick: move |_| on_navigate.call(AppPath::MyCandidates),
                                        div { class: "avatar", "{initial}" }
                                        div { class: "watch-row-info",
                                            p { class: "watch-row-name", "{candidate.name}" }
                                            p { class: "watch-row-role", "{candidate.role}" }
                                        }
                                        span { class: "badge", "{candidate.stage}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn JobRow(job: JobSummary, on_navigate: EventHandler<AppPath>) -> Element {
    let job_id = job.id;
    let status_class = match job.status {
        JobStatus::Active => "badge badge-active",
        JobStatus::Closed => "badge badge-closed",
    };
    let status = job.status.as_str();

    rsx! {
        li { class: "job-row",
            div { class: "job-row-info",
                p { class: "job-row-title", "{job.title}" }
                p { class: "job-row-meta",
                    span { class: "job-row-applicants", "{job.applicants} applicants" }
                    span { class: "job-row-posted", "Posted {job.posted}" }
                }
            }
            span { class: status_class, "{status}" }
            button {
                class: "btn btn-secondary btn-sm",
                onclick: move |_| on_navigate.call(AppPath::submissions_for(job_id)),
                "View"
            }
        }
    }
}
