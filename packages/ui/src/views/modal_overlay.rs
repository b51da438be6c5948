use dioxus::prelude::*;

/// Dimmed full-screen backdrop with a centered dialog card.
///
/// Clicking the backdrop or pressing Escape calls `on_close`; clicks inside
/// the card do not propagate.
#[component]
pub fn ModalOverlay(
    on_close: EventHandler<()>,
    #[props(default = "max-w-md".to_string())] width: String,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            tabindex: "-1",
            onclick: move |_| on_close.call(()),
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape {
                    on_close.call(());
                }
            },
            div {
                class: "modal-card {width}",
                role: "dialog",
                aria_modal: "true",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}
