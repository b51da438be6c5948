use dioxus::prelude::*;
use store::Job;

use crate::components::{Button, ButtonVariant};
use crate::icons::{FaArrowLeft, FaBriefcase, FaLocationDot, FaMoneyBillWave};
use crate::markdown::render_markdown;
use crate::Icon;

/// Detail panel that slides over the job grid. The parent keeps `job` set
/// while `open` goes false so the content stays visible during the slide-out.
#[component]
pub fn JobDetail(
    job: Option<Job>,
    open: bool,
    on_back: EventHandler<()>,
    on_apply: EventHandler<Job>,
) -> Element {
    let class = if open { "job-detail job-detail--open" } else { "job-detail" };

    rsx! {
        aside {
            class: "{class}",
            aria_hidden: if open { "false" } else { "true" },
            if let Some(job) = job {
                div {
                    class: "p-6 flex flex-col gap-4",
                    Button {
                        variant: ButtonVariant::Ghost,
                        class: "self-start",
                        onclick: move |_| on_back.call(()),
                        Icon { width: 14, height: 14, icon: FaArrowLeft }
                        " Back to jobs"
                    }
                    div {
                        h2 { class: "m-0 text-xl font-semibold", "{job.title}" }
                        p { class: "m-0 text-muted", "{job.company}" }
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
                        if !job.job_type.is_empty() {
                            span {
                                Icon { width: 12, height: 12, icon: FaBriefcase }
                                " {job.job_type}"
                            }
                        }
                    }
                    div {
                        class: "prose",
                        dangerous_inner_html: render_markdown(&job.description),
                    }
                    Button {
                        onclick: {
                            let job = job.clone();
                            move |_| on_apply.call(job.clone())
                        },
                        "Apply now"
                    }
                }
            }
        }
    }
}
