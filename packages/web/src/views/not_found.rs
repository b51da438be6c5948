use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    rsx! {
        section {
            class: "page-center",
            h1 { "Page not found" }
            p { class: "text-muted", "Nothing lives at {path}." }
            Link { class: "btn btn-primary", to: Route::Home {}, "Back home" }
        }
    }
}
