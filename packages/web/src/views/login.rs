//! Email/password sign-in, shared by the user and admin screens.

use api::{CredentialScope, UserInfo};
use dioxus::prelude::*;
use ui::components::{Button, FormMessage, Input, Label, MessageKind};
use ui::validation::{first_error, require, validate_email};
use ui::{make_client, use_auth, use_scope_auth, AuthState};

use crate::Route;

/// Sign-in form for one credential scope. Stores the token and updates the
/// scope's session signal before calling `on_success`.
#[component]
pub fn SignInForm(scope: CredentialScope, on_success: EventHandler<UserInfo>) -> Element {
    let mut auth = use_scope_auth(scope);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            let e = email();
            let p = password();
            if let Some(message) = first_error([validate_email(&e), require("Password", &p)]) {
                error.set(Some(message));
                return;
            }

            loading.set(true);
            match make_client(scope).login(&e, &p).await {
                Ok(user) => {
                    auth.set(AuthState::signed_in(user.clone()));
                    on_success.call(user);
                }
                Err(err) => {
                    tracing::warn!(?scope, "sign-in failed: {err}");
                    error.set(Some(err.user_message()));
                }
            }
            loading.set(false);
        });
    };

    let prefix = match scope {
        CredentialScope::User => "login",
        CredentialScope::Admin => "admin-login",
    };

    rsx! {
        form {
            class: "flex flex-col gap-3",
            onsubmit: handle_submit,
            div {
                Label { html_for: "{prefix}-email", "Email" }
                Input {
                    id: "{prefix}-email",
                    class: "w-full",
                    r#type: "email",
                    autocomplete: "email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
            }
            div {
                Label { html_for: "{prefix}-password", "Password" }
                Input {
                    id: "{prefix}-password",
                    class: "w-full",
                    r#type: "password",
                    autocomplete: "current-password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
            }
            if let Some(message) = error() {
                FormMessage { kind: MessageKind::Error, message }
            }
            Button {
                r#type: "submit",
                disabled: loading(),
                if loading() { "Signing in..." } else { "Sign in" }
            }
        }
    }
}

#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    // Already signed in
    use_effect(move || {
        if auth().is_authenticated() {
            nav.replace(Route::Dashboard {});
        }
    });

    rsx! {
        div {
            class: "auth-card",
            h1 { "Welcome back" }
            p { class: "text-muted", "Sign in to browse and apply for jobs." }
            SignInForm {
                scope: CredentialScope::User,
                on_success: move |_| {
                    nav.push(Route::Dashboard {});
                },
            }
            div {
                class: "auth-links",
                Link { to: Route::ForgotPassword {}, "Forgot your password?" }
                Link { to: Route::Register {}, "Create an account" }
            }
        }
    }
}
