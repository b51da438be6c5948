use dioxus::prelude::*;
use ui::icons::{FaBolt, FaMagnifyingGlass, FaShieldHalved};
use ui::{use_auth, Icon};

use crate::Route;

const FEATURED: usize = 3;

#[component]
pub fn Home() -> Element {
    let auth = use_auth();
    let featured: Vec<store::Job> = store::fixtures().into_iter().take(FEATURED).collect();
    let start = if auth().is_authenticated() {
        Route::Dashboard {}
    } else {
        Route::Register {}
    };

    rsx! {
        section {
            class: "hero",
            h1 { "Find work you care about" }
            p { class: "text-muted", "Curated roles from teams that ship. Apply in minutes." }
            div {
                class: "flex gap-2 justify-center",
                Link { class: "btn btn-primary", to: start, "Get started" }
                Link { class: "btn btn-outline", to: Route::About {}, "Learn more" }
            }
        }

        section {
            class: "feature-grid",
            div {
                class: "feature",
                Icon { icon: FaMagnifyingGlass, width: 20, height: 20 }
                h3 { "Search that gets out of the way" }
                p { class: "text-muted", "Filter by skill and company without reloading the page." }
            }
            div {
                class: "feature",
                Icon { icon: FaBolt, width: 20, height: 20 }
                h3 { "Three-step applications" }
                p { class: "text-muted", "Your details, your résumé, a short note. Done." }
            }
            div {
                class: "feature",
                Icon { icon: FaShieldHalved, width: 20, height: 20 }
                h3 { "Verified accounts" }
                p { class: "text-muted", "Every account confirms its email with a one-time code." }
            }
        }

        section {
            h2 { "Featured roles" }
            div {
                class: "job-grid",
                for job in featured {
                    div {
                        key: "{job.id}",
                        class: "job-card",
                        span { class: "job-card-title", "{job.title}" }
                        span { class: "text-sm text-muted", "{job.company} · {job.location}" }
                        span { class: "text-sm", "{job.salary}" }
                    }
                }
            }
        }
    }
}
