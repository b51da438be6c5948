use api::CredentialScope;
use dioxus::prelude::*;
use ui::components::{Button, FormMessage, Input, Label, MessageKind};
use ui::make_client;
use ui::validation::validate_email;

use crate::Route;

#[component]
pub fn ForgotPassword() -> Element {
    let mut email = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut sent = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            let e = email();
            if let Err(message) = validate_email(&e) {
                error.set(Some(message));
                return;
            }
            loading.set(true);
            match make_client(CredentialScope::User).forgot_password(&e).await {
                Ok(resp) => sent.set(Some(resp.message.unwrap_or_else(|| {
                    "If that address has an account, a reset link is on its way.".to_string()
                }))),
                Err(err) => error.set(Some(err.user_message())),
            }
            loading.set(false);
        });
    };

    rsx! {
        div {
            class: "auth-card",
            h1 { "Reset your password" }
            if let Some(message) = sent() {
                FormMessage { kind: MessageKind::Success, message }
            } else {
                p { class: "text-muted", "We will email you a link to choose a new password." }
                form {
                    class: "flex flex-col gap-3",
                    onsubmit: handle_submit,
                    div {
                        Label { html_for: "forgot-email", "Email" }
                        Input {
                            id: "forgot-email",
                            class: "w-full",
                            r#type: "email",
                            autocomplete: "email",
                            value: email(),
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                    }
                    if let Some(message) = error() {
                        FormMessage { kind: MessageKind::Error, message }
                    }
                    Button {
                        r#type: "submit",
                        disabled: loading(),
                        "Send reset link"
                    }
                }
            }
            div {
                class: "auth-links",
                Link { to: Route::Login {}, "Back to sign in" }
            }
        }
    }
}
