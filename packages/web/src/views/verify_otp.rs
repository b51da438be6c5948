use api::CredentialScope;
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, FormMessage, MessageKind};
use ui::{make_client, use_auth, use_countdown, AuthState, OtpDigits, OtpInput, RESEND_COOLDOWN_SECS};

use crate::Route;

#[component]
pub fn VerifyOtp(email: String) -> Element {
    let mut auth = use_auth();
    let nav = use_navigator();
    let mut digits = use_signal(OtpDigits::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut notice = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);
    let mut cooldown = use_countdown();

    // A fresh code was just sent by registration.
    use_hook(move || cooldown.start(RESEND_COOLDOWN_SECS));

    let verify_email = email.clone();
    let handle_verify = move |evt: FormEvent| {
        evt.prevent_default();
        let email = verify_email.clone();
        spawn(async move {
            error.set(None);
            let Some(code) = digits.read().code() else {
                error.set(Some("Enter all 6 digits of the code".to_string()));
                return;
            };
            loading.set(true);
            match make_client(CredentialScope::User).verify_otp(&email, &code).await {
                Ok(user) => {
                    auth.set(AuthState::signed_in(user));
                    nav.push(Route::Dashboard {});
                }
                Err(err) => {
                    loading.set(false);
                    digits.write().clear();
                    error.set(Some(err.user_message()));
                }
            }
        });
    };

    let resend_email = email.clone();
    let handle_resend = move |_| {
        let email = resend_email.clone();
        spawn(async move {
            error.set(None);
            notice.set(None);
            match make_client(CredentialScope::User).resend_otp(&email).await {
                Ok(resp) => {
                    cooldown.start(RESEND_COOLDOWN_SECS);
                    notice.set(Some(
                        resp.message
                            .unwrap_or_else(|| "A new code is on its way.".to_string()),
                    ));
                }
                Err(err) => error.set(Some(err.user_message())),
            }
        });
    };

    let remaining = cooldown.remaining();

    rsx! {
        div {
            class: "auth-card",
            h1 { "Check your inbox" }
            if email.is_empty() {
                p { class: "text-muted", "Enter the 6-digit code we emailed you." }
            } else {
                p { class: "text-muted", "Enter the 6-digit code sent to {email}." }
            }

            form {
                class: "flex flex-col gap-4",
                onsubmit: handle_verify,
                OtpInput { digits, disabled: loading() }
                if let Some(message) = error() {
                    FormMessage { kind: MessageKind::Error, message }
                }
                if let Some(message) = notice() {
                    FormMessage { kind: MessageKind::Info, message }
                }
                Button {
                    r#type: "submit",
                    disabled: loading() || !digits.read().is_complete(),
                    if loading() { "Verifying..." } else { "Verify email" }
                }
            }

            div {
                class: "auth-links",
                Button {
                    variant: ButtonVariant::Ghost,
                    disabled: cooldown.is_running() || email.is_empty(),
                    onclick: handle_resend,
                    if remaining > 0 { "Resend code in {remaining}s" } else { "Resend code" }
                }
            }
        }
    }
}
