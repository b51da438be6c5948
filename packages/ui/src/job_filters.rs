use dioxus::prelude::*;
use store::JobFilter;

use crate::components::{Button, ButtonVariant, Input, Label};

/// Search box plus tag and company checkboxes.
#[component]
pub fn JobFilters(
    mut filter: Signal<JobFilter>,
    tags: Vec<String>,
    companies: Vec<String>,
) -> Element {
    let current = filter();

    rsx! {
        div {
            class: "job-filters",
            div {
                Label { html_for: "job-search", "Search" }
                Input {
                    id: "job-search",
                    class: "w-full",
                    r#type: "search",
                    placeholder: "Title, company, location or skill",
                    value: current.search.clone(),
                    oninput: move |evt: FormEvent| filter.write().search = evt.value(),
                }
            }

            fieldset {
                class: "filter-group",
                legend { "Skills" }
                for tag in tags {
                    label {
                        key: "{tag}",
                        class: "filter-option",
                        input {
                            r#type: "checkbox",
                            checked: current.tags.contains(&tag),
                            onchange: {
                                let tag = tag.clone();
                                move |_| filter.write().toggle_tag(&tag)
                            },
                        }
                        " {tag}"
                    }
                }
            }

            fieldset {
                class: "filter-group",
                legend { "Companies" }
                for company in companies {
                    label {
                        key: "{company}",
                        class: "filter-option",
                        input {
                            r#type: "checkbox",
                            checked: current.companies.contains(&company),
                            onchange: {
                                let company = company.clone();
                                move |_| filter.write().toggle_company(&company)
                            },
                        }
                        " {company}"
                    }
                }
            }

            if !current.is_empty() {
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| filter.write().clear(),
                    "Clear filters"
                }
            }
        }
    }
}
