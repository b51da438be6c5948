use dioxus::prelude::*;

use super::ModalOverlay;
use crate::components::{Button, ButtonVariant};

/// Yes/no prompt for destructive actions.
#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    #[props(default = "Delete".to_string())] confirm_label: String,
    #[props(default)] busy: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        ModalOverlay {
            on_close: move |_| on_cancel.call(()),
            div {
                class: "p-6",
                h2 { class: "m-0 mb-3 text-lg font-semibold", "{title}" }
                p { class: "m-0 text-sm text-muted", "{message}" }
                div {
                    class: "flex justify-end gap-2 mt-5",
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: busy,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Destructive,
                        disabled: busy,
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}
