use dioxus::prelude::*;
use store::JobFilter;
use ui::components::Input;

/// Read-only postings table.
#[component]
pub fn AdminJobs() -> Element {
    let jobs = use_hook(store::fixtures);
    let mut search = use_signal(String::new);
    let visible = JobFilter::new().with_search(search()).apply(&jobs);

    rsx! {
        section {
            class: "admin-page",
            div {
                class: "admin-toolbar",
                h1 { class: "m-0 text-xl", "Job postings" }
                Input {
                    class: "flex-1",
                    r#type: "search",
                    placeholder: "Search postings",
                    value: search(),
                    oninput: move |evt: FormEvent| search.set(evt.value()),
                }
                span { class: "text-sm text-muted", "{visible.len()} of {jobs.len()}" }
            }
            table {
                class: "data-table",
                thead {
                    tr {
                        th { "Title" }
                        th { "Company" }
                        th { "Location" }
                        th { "Type" }
                        th { "Salary" }
                        th { "Posted" }
                    }
                }
                tbody {
                    for job in visible {
                        tr {
                            key: "{job.id}",
                            td { "{job.title}" }
                            td { "{job.company}" }
                            td { "{job.location}" }
                            td { "{job.job_type}" }
                            td { "{job.salary}" }
                            td { "{job.posted}" }
                        }
                    }
                }
            }
        }
    }
}
