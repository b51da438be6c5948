use api::CredentialScope;
use dioxus::prelude::*;
use ui::components::{Button, FormMessage, Input, Label, MessageKind};
use ui::make_client;
use ui::validation::validate_password;

use crate::Route;

/// Landing page of the emailed reset link; `email` and `token` come from
/// its query string.
#[component]
pub fn ResetPassword(email: String, token: String) -> Element {
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut done = use_signal(|| false);
    let mut loading = use_signal(|| false);
    let link_valid = !email.is_empty() && !token.is_empty();

    let handle_submit = {
        let email = email.clone();
        let token = token.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let email = email.clone();
            let token = token.clone();
            spawn(async move {
                error.set(None);
                let p = password();
                let cp = confirm();
                if let Err(message) = validate_password(&p, &cp) {
                    error.set(Some(message));
                    return;
                }
                loading.set(true);
                match make_client(CredentialScope::User)
                    .reset_password(&email, &token, &p, &cp)
                    .await
                {
                    Ok(_) => done.set(true),
                    Err(err) => error.set(Some(err.user_message())),
                }
                loading.set(false);
            });
        }
    };

    rsx! {
        div {
            class: "auth-card",
            h1 { "Choose a new password" }
            if !link_valid {
                FormMessage {
                    kind: MessageKind::Error,
                    message: "This reset link is incomplete. Request a new one.".to_string(),
                }
                Link { to: Route::ForgotPassword {}, "Request a new link" }
            } else if done() {
                FormMessage {
                    kind: MessageKind::Success,
                    message: "Your password has been reset.".to_string(),
                }
                Link { class: "btn btn-primary", to: Route::Login {}, "Sign in" }
            } else {
                p { class: "text-muted", "Resetting the password for {email}." }
                form {
                    class: "flex flex-col gap-3",
                    onsubmit: handle_submit,
                    div {
                        Label { html_for: "reset-password", "New password" }
                        Input {
                            id: "reset-password",
                            class: "w-full",
                            r#type: "password",
                            autocomplete: "new-password",
                            value: password(),
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                    }
                    div {
                        Label { html_for: "reset-confirm", "Confirm password" }
                        Input {
                            id: "reset-confirm",
                            class: "w-full",
                            r#type: "password",
                            autocomplete: "new-password",
                            value: confirm(),
                            oninput: move |evt: FormEvent| confirm.set(evt.value()),
                        }
                    }
                    if let Some(message) = error() {
                        FormMessage { kind: MessageKind::Error, message }
                    }
                    Button {
                        r#type: "submit",
                        disabled: loading(),
                        "Reset password"
                    }
                }
            }
        }
    }
}
