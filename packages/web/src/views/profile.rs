use api::{CredentialScope, ProfileUpdate};
use dioxus::prelude::*;
use ui::components::{Button, FormMessage, Input, Label, MessageKind};
use ui::validation::{first_error, require, validate_email, validate_password, validate_phone};
use ui::{make_client, use_auth, AuthState};

#[component]
pub fn Profile() -> Element {
    let auth = use_auth();
    let Some(user) = auth().user else {
        return rsx! {};
    };
    let joined = user.joined_on().unwrap_or("").to_string();

    rsx! {
        div {
            class: "content-narrow flex flex-col gap-6",
            div {
                h1 { class: "m-0", "Your profile" }
                if !joined.is_empty() {
                    p { class: "text-sm text-muted", "Member since {joined}" }
                }
                if !user.is_verified() {
                    FormMessage {
                        kind: MessageKind::Info,
                        message: "Your email address is not verified yet.".to_string(),
                    }
                }
            }
            ProfileForm {}
            PasswordForm {}
        }
    }
}

#[component]
fn ProfileForm() -> Element {
    let mut auth = use_auth();
    let initial = auth.peek().user.clone();
    let mut name = use_signal(|| initial.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let mut email = use_signal(|| initial.as_ref().map(|u| u.email.clone()).unwrap_or_default());
    let mut phone = use_signal(|| {
        initial
            .as_ref()
            .and_then(|u| u.phone.clone())
            .unwrap_or_default()
    });
    let mut error = use_signal(|| Option::<String>::None);
    let mut saved = use_signal(|| false);
    let mut loading = use_signal(|| false);

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            saved.set(false);
            let n = name();
            let e = email();
            let p = phone();
            if let Some(message) =
                first_error([require("Name", &n), validate_email(&e), validate_phone(&p)])
            {
                error.set(Some(message));
                return;
            }

            let update = ProfileUpdate {
                name: n.trim().to_string(),
                email: e.trim().to_string(),
                phone: Some(p.trim().to_string()).filter(|p| !p.is_empty()),
            };
            loading.set(true);
            match make_client(CredentialScope::User).update_profile(&update).await {
                Ok(user) => {
                    auth.set(AuthState::signed_in(user));
                    saved.set(true);
                }
                Err(err) => error.set(Some(err.user_message())),
            }
            loading.set(false);
        });
    };

    rsx! {
        form {
            class: "card flex flex-col gap-3",
            onsubmit: handle_save,
            h2 { class: "m-0 text-lg", "Details" }
            div {
                Label { html_for: "profile-name", "Full name" }
                Input {
                    id: "profile-name",
                    class: "w-full",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }
            }
            div {
                Label { html_for: "profile-email", "Email" }
                Input {
                    id: "profile-email",
                    class: "w-full",
                    r#type: "email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
            }
            div {
                Label { html_for: "profile-phone", "Phone" }
                Input {
                    id: "profile-phone",
                    class: "w-full",
                    r#type: "tel",
                    value: phone(),
                    oninput: move |evt: FormEvent| phone.set(evt.value()),
                }
            }
            if let Some(message) = error() {
                FormMessage { kind: MessageKind::Error, message }
            }
            if saved() {
                FormMessage { kind: MessageKind::Success, message: "Profile updated.".to_string() }
            }
            Button { r#type: "submit", disabled: loading(), "Save changes" }
        }
    }
}

#[component]
fn PasswordForm() -> Element {
    let mut current = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut notice = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_change = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            notice.set(None);
            let c = current();
            let p = password();
            let cp = confirm();
            if let Some(message) =
                first_error([require("Current password", &c), validate_password(&p, &cp)])
            {
                error.set(Some(message));
                return;
            }
            loading.set(true);
            match make_client(CredentialScope::User)
                .change_password(&c, &p, &cp)
                .await
            {
                Ok(resp) => {
                    current.set(String::new());
                    password.set(String::new());
                    confirm.set(String::new());
                    notice.set(Some(
                        resp.message.unwrap_or_else(|| "Password changed.".to_string()),
                    ));
                }
                Err(err) => error.set(Some(err.user_message())),
            }
            loading.set(false);
        });
    };

    rsx! {
        form {
            class: "card flex flex-col gap-3",
            onsubmit: handle_change,
            h2 { class: "m-0 text-lg", "Change password" }
            div {
                Label { html_for: "current-password", "Current password" }
                Input {
                    id: "current-password",
                    class: "w-full",
                    r#type: "password",
                    autocomplete: "current-password",
                    value: current(),
                    oninput: move |evt: FormEvent| current.set(evt.value()),
                }
            }
            div {
                Label { html_for: "new-password", "New password" }
                Input {
                    id: "new-password",
                    class: "w-full",
                    r#type: "password",
                    autocomplete: "new-password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
            }
            div {
                Label { html_for: "confirm-password", "Confirm new password" }
                Input {
                    id: "confirm-password",
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
            if let Some(message) = notice() {
                FormMessage { kind: MessageKind::Success, message }
            }
            Button { r#type: "submit", disabled: loading(), "Update password" }
        }
    }
}
