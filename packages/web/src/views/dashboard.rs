//! Job browser: filter sidebar, card grid, sliding detail panel.

use dioxus::prelude::*;
use store::{distinct_companies, distinct_tags, Job, JobFilter};
use ui::{use_auth, ApplyWizardModal, JobCard, JobDetail, JobFilters};

#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let jobs = use_hook(store::fixtures);
    let filter = use_signal(JobFilter::new);
    let mut selected = use_signal(|| Option::<Job>::None);
    let mut detail_open = use_signal(|| false);
    let mut applying = use_signal(|| Option::<Job>::None);

    let tags = distinct_tags(&jobs);
    let companies = distinct_companies(&jobs);
    let visible = filter.read().apply(&jobs);
    let count = visible.len();
    let selected_id = selected().map(|job| job.id);
    let greeting = auth()
        .user
        .map(|u| format!("Welcome, {}", u.display_name()))
        .unwrap_or_default();

    rsx! {
        div {
            class: "dashboard",
            aside {
                class: "dashboard-sidebar",
                JobFilters { filter, tags, companies }
            }
            section {
                class: "dashboard-main",
                div {
                    class: "flex items-center justify-between mb-4",
                    h1 { class: "m-0 text-xl", "{greeting}" }
                    span { class: "text-sm text-muted", "{count} open roles" }
                }
                div {
                    class: "job-browser",
                    if visible.is_empty() {
                        p { class: "text-muted", "No jobs match these filters." }
                    }
                    div {
                        class: "job-grid",
                        for job in visible {
                            JobCard {
                                key: "{job.id}",
                                selected: detail_open() && selected_id == Some(job.id),
                                job,
                                on_select: move |job: Job| {
                                    selected.set(Some(job));
                                    detail_open.set(true);
                                },
                            }
                        }
                    }
                    JobDetail {
                        job: selected(),
                        open: detail_open(),
                        on_back: move |_| detail_open.set(false),
                        on_apply: move |job: Job| applying.set(Some(job)),
                    }
                }
            }
        }

        if let Some(job) = applying() {
            ApplyWizardModal {
                key: "{job.id}",
                job,
                user: auth().user,
                on_close: move |_| applying.set(None),
            }
        }
    }
}
