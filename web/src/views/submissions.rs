use dioxus::prelude::*;
use types::{JobId, mock, submissions_for};

#[allow(non_snake_case)]
#[component]
pub fn Submissions(jobId: Option<JobId>) -> Element {
    let rows = submissions_for(&mock::submissions(), jobId);
    let subtitle = match jobId {
        Some(id) => format!("Candidates submitted for job #{id}"),
        None => "Every candidate submitted to a client.".to_string(),
    };

    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Submissions" }
                    p { class: "page-subtitle", "{subtitle}" }
                }
            }
            div { class: "card",
                if rows.is_empty() {
                    div { class: "empty-state", "No submissions yet." }
                } else {
                    div { class: "table-container",
                        table {
                            thead {
                                tr {
                                    th { "Candidate" }
                                    th { "Client" }
                                    th { "Stage" }
                                    th { "Submitted" }
                                }
                            }
                            tbody {
                                for submission in rows {
                                    tr { key: "{submission.id}",
                                        td { "{submission.candidate}" }
                                        td { "{submission.client}" }
                                        td { span { class: "badge", "{submission.stage}" } }
                                        td { class: "text-muted", "{submission.submitted_on}" }
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

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus_core::VirtualDom;

    fn app(job: Option<JobId>) -> Element {
        rsx! { Submissions { jobId: job } }
    }

    fn render(job: Option<JobId>) -> String {
        let mut dom = VirtualDom::new_with_props(app, job);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn job_query_narrows_the_table() {
        let html = render(Some(2));

        assert!(html.contains("Candidates submitted for job #2"), "{html}");
        assert!(html.contains("Bob Smith"));
        assert!(!html.contains("Alice Johnson"));
    }

    #[test]
    fn no_job_lists_everything() {
        let html = render(None);
        for candidate in ["Alice Johnson", "Bob Smith", "Charlie Brown"] {
            assert!(html.contains(candidate), "{candidate}: {html}");
        }
    }
}
