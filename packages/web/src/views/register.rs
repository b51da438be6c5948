//! Registration page view with email/password form.

use api::CredentialScope;
use dioxus::prelude::*;
use ui::components::{Button, FormMessage, Input, Label, MessageKind};
use ui::make_client;
use ui::validation::{first_error, require, validate_email, validate_password};

use crate::Route;

#[component]
pub fn Register() -> Element {
    let nav = use_navigator();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let n = name();
            let e = email();
            let p = password();
            let cp = confirm_password();

            if let Some(message) = first_error([
                require("Name", &n),
                validate_email(&e),
                validate_password(&p, &cp),
            ]) {
                error.set(Some(message));
                return;
            }

            loading.set(true);
            match make_client(CredentialScope::User).register(&n, &e, &p, &cp).await {
                Ok(_) => {
                    nav.push(Route::VerifyOtp {
                        email: e.trim().to_string(),
                    });
                }
                Err(err) => {
                    loading.set(false);
                    error.set(Some(err.user_message()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-card",
            h1 { "Create your account" }
            p { class: "text-muted", "We will email you a code to confirm your address." }

            form {
                class: "flex flex-col gap-3",
                onsubmit: handle_register,
                div {
                    Label { html_for: "register-name", "Full name" }
                    Input {
                        id: "register-name",
                        class: "w-full",
                        autocomplete: "name",
                        value: name(),
                        oninput: move |evt: FormEvent| name.set(evt.value()),
                    }
                }
                div {
                    Label { html_for: "register-email", "Email" }
                    Input {
                        id: "register-email",
                        class: "w-full",
                        r#type: "email",
                        autocomplete: "email",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                }
                div {
                    Label { html_for: "register-password", "Password" }
                    Input {
                        id: "register-password",
                        class: "w-full",
                        r#type: "password",
                        autocomplete: "new-password",
                        placeholder: "At least 8 characters",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                }
                div {
                    Label { html_for: "register-confirm", "Confirm password" }
                    Input {
                        id: "register-confirm",
                        class: "w-full",
                        r#type: "password",
                        autocomplete: "new-password",
                        value: confirm_password(),
                        oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                    }
                }
                if let Some(message) = error() {
                    FormMessage { kind: MessageKind::Error, message }
                }
                Button {
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Creating account..." } else { "Create account" }
                }
            }
            div {
                class: "auth-links",
                span {
                    "Already registered? "
                    Link { to: Route::Login {}, "Sign in" }
                }
            }
        }
    }
}
