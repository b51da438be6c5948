use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MessageKind {
    Error,
    Success,
    Info,
}

/// Inline alert shown next to the form that produced it.
#[component]
pub fn FormMessage(kind: MessageKind, message: String) -> Element {
    let class = match kind {
        MessageKind::Error => "form-message form-message--error",
        MessageKind::Success => "form-message form-message--success",
        MessageKind::Info => "form-message form-message--info",
    };
    rsx! {
        div {
            class: "{class}",
            role: if kind == MessageKind::Error { "alert" } else { "status" },
            "{message}"
        }
    }
}
