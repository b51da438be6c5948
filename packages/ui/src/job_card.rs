use dioxus::prelude::*;
use store::Job;

use crate::icons::{FaLocationDot, FaMoneyBillWave};
use crate::Icon;

/// Summary card in the job grid.
#[component]
pub fn JobCard(job: Job, #[props(default)] selected: bool, on_select: EventHandler<Job>) -> Element {
    let class = if selected { "job-card job-card--selected" } else { "job-card" };
    let initials = job.initials();
    let clicked = job.clone();

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            onclick: move |_| on_select.call(clicked.clone()),
            div {
                class: "flex items-center gap-3",
                span { class: "company-badge", "{initials}" }
                div {
                    class: "flex flex-col items-start",
                    span { class: "job-card-title", "{job.title}" }
                    span { class: "text-sm text-muted", "{job.company}" }
                }
            }
            div {
                class: "job-card-meta",
                span {
                    Icon { width: 12, height: 12, icon: FaLocationDot }
                    " {job.location}"
                }
                span {
                    Icon { width: 12, height: 12, icon: FaMoneyBillWave }
                    " {job.salary}"
                }
            }
            div {
                class: "tag-list",
                for tag in job.tags.iter() {
                    span { key: "{tag}", class: "tag", "{tag}" }
                }
            }
            if !job.posted.is_empty() {
                span { class: "text-xs text-muted", "{job.posted}" }
            }
        }
    }
}
