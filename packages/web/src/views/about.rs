use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn About() -> Element {
    rsx! {
        section {
            class: "content-narrow",
            h1 { "About JobBoard" }
            p {
                "JobBoard connects people with small, focused teams. We keep listings short, "
                "applications shorter, and never sell candidate data."
            }
            h2 { "For candidates" }
            p { "Create an account, verify your email, and apply to any listing from your dashboard." }
            h2 { "For employers" }
            p {
                "Administrators manage accounts from the "
                Link { to: Route::AdminLogin {}, "admin console" }
                "."
            }
        }
    }
}
