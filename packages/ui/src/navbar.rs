use dioxus::prelude::*;

use crate::icons::FaBriefcase;
use crate::Icon;

/// Top bar. Platform crates pass router links as `children` and the
/// session-dependent buttons as `actions`.
#[component]
pub fn Navbar(
    #[props(default = "JobBoard".to_string())] brand: String,
    actions: Option<Element>,
    children: Element,
) -> Element {
    rsx! {
        header {
            class: "navbar",
            div {
                class: "navbar-brand",
                Icon { icon: FaBriefcase, width: 18, height: 18 }
                span { "{brand}" }
            }
            nav {
                class: "navbar-links",
                {children}
            }
            div {
                class: "navbar-actions",
                {actions}
            }
        }
    }
}

#[component]
pub fn Footer(children: Element) -> Element {
    rsx! {
        footer {
            class: "footer",
            div { class: "footer-links", {children} }
            p { class: "m-0 text-sm text-muted", "JobBoard: find work you care about." }
        }
    }
}
