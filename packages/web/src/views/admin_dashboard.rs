//! Admin users table: search, status filter, pagination, edit and delete.

use api::{ApiResult, CredentialScope, UserInfo, UserQuery, UserStatus, UserUpdate};
use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, FormMessage, Input, Label, MessageKind};
use ui::icons::{FaPen, FaTrashCan};
use ui::validation::{first_error, require, validate_email};
use ui::views::{ConfirmDialog, ModalOverlay};
use ui::{make_client, use_admin_auth, AuthState, Icon};

/// A rejected admin token means the session is over: the stored token is
/// dropped and the admin layout redirects once the signal settles signed out.
async fn end_admin_session(mut auth: Signal<AuthState>) {
    tracing::warn!("admin token rejected; signing out");
    make_client(CredentialScope::Admin).clear_token().await;
    auth.set(AuthState::signed_out());
}

/// Follow-up for the users table once an edit or delete settles.
#[derive(Debug, Clone, PartialEq)]
enum AfterMutation {
    /// Re-fetch the current page.
    Refresh,
    /// Keep the table and show `message`.
    Report { message: String, signed_out: bool },
}

impl AfterMutation {
    fn from_result(result: &ApiResult<()>) -> Self {
        match result {
            Ok(()) => AfterMutation::Refresh,
            Err(err) => AfterMutation::Report {
                message: err.user_message(),
                signed_out: err.is_unauthorized(),
            },
        }
    }
}

fn previous_page(page: u32) -> u32 {
    page.saturating_sub(1).max(1)
}

#[component]
pub fn AdminDashboard() -> Element {
    let auth = use_admin_auth();
    let mut query = use_signal(UserQuery::default);
    let mut editing = use_signal(|| Option::<UserInfo>::None);
    let mut deleting = use_signal(|| Option::<UserInfo>::None);
    let mut deleting_busy = use_signal(|| false);
    let mut action_error = use_signal(|| Option::<String>::None);
    let mut notice = use_signal(|| Option::<String>::None);

    let mut users = use_resource(move || async move {
        let result = make_client(CredentialScope::Admin).list_users(&query()).await;
        if matches!(&result, Err(err) if err.is_unauthorized()) {
            end_admin_session(auth).await;
        }
        result
    });

    let confirm_delete = move |_| {
        let Some(user) = deleting() else {
            return;
        };
        spawn(async move {
            deleting_busy.set(true);
            let result = make_client(CredentialScope::Admin).delete_user(user.id).await;
            match AfterMutation::from_result(&result) {
                AfterMutation::Refresh => {
                    notice.set(Some(format!("Deleted {}.", user.display_name())));
                    users.restart();
                }
                AfterMutation::Report { message, signed_out } => {
                    if signed_out {
                        end_admin_session(auth).await;
                    }
                    action_error.set(Some(message));
                }
            }
            deleting_busy.set(false);
            deleting.set(None);
        });
    };

    let current = query();

    rsx! {
        section {
            class: "admin-page",
            div {
                class: "admin-toolbar",
                h1 { class: "m-0 text-xl", "Users" }
                Input {
                    class: "flex-1",
                    r#type: "search",
                    placeholder: "Search by name or email",
                    value: current.search.clone(),
                    oninput: move |evt: FormEvent| {
                        let mut q = query.write();
                        q.search = evt.value();
                        q.page = 1;
                    },
                }
                select {
                    class: "input",
                    aria_label: "Verification status",
                    value: current.status.as_param().unwrap_or("all"),
                    onchange: move |evt: FormEvent| {
                        let mut q = query.write();
                        q.status = UserStatus::from_param(&evt.value());
                        q.page = 1;
                    },
                    option { value: "all", "All users" }
                    option { value: "verified", "Verified" }
                    option { value: "unverified", "Unverified" }
                }
            }

            if let Some(message) = notice() {
                FormMessage { kind: MessageKind::Success, message }
            }
            if let Some(message) = action_error() {
                FormMessage { kind: MessageKind::Error, message }
            }

            {match &*users.read() {
                None => rsx! {
                    p { class: "text-muted", role: "status", "Loading users..." }
                },
                Some(Err(err)) => rsx! {
                    FormMessage { kind: MessageKind::Error, message: err.user_message() }
                },
                Some(Ok(page)) if page.data.is_empty() => rsx! {
                    p { class: "text-muted", "No users match." }
                },
                Some(Ok(page)) => {
                    let has_previous = page.has_previous();
                    let has_next = page.has_next();
                    rsx! {
                        table {
                            class: "data-table",
                            thead {
                                tr {
                                    th { "Name" }
                                    th { "Email" }
                                    th { "Status" }
                                    th { "Joined" }
                                    th { class: "text-right", "Actions" }
                                }
                            }
                            tbody {
                                for user in page.data.iter().cloned() {
                                    tr {
                                        key: "{user.id}",
                                        td { "{user.display_name()}" }
                                        td { "{user.email}" }
                                        td {
                                            if user.is_verified() {
                                                span { class: "badge badge--success", "Verified" }
                                            } else {
                                                span { class: "badge", "Unverified" }
                                            }
                                        }
                                        td { {user.joined_on().unwrap_or("-").to_string()} }
                                        td {
                                            class: "text-right",
                                            Button {
                                                variant: ButtonVariant::Ghost,
                                                title: "Edit",
                                                onclick: {
                                                    let user = user.clone();
                                                    move |_| {
                                                        action_error.set(None);
                                                        editing.set(Some(user.clone()));
                                                    }
                                                },
                                                Icon { icon: FaPen, width: 14, height: 14 }
                                            }
                                            Button {
                                                variant: ButtonVariant::Ghost,
                                                title: "Delete",
                                                onclick: {
                                                    let user = user.clone();
                                                    move |_| {
                                                        action_error.set(None);
                                                        deleting.set(Some(user.clone()));
                                                    }
                                                },
                                                Icon { icon: FaTrashCan, width: 14, height: 14 }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                        div {
                            class: "pagination",
                            Button {
                                variant: ButtonVariant::Outline,
                                disabled: !has_previous,
                                onclick: move |_| {
                                    let mut q = query.write();
                                    q.page = previous_page(q.page);
                                },
                                "Previous"
                            }
                            span { class: "text-sm text-muted", "Page {page.current_page} of {page.last_page} · {page.total} users" }
                            Button {
                                variant: ButtonVariant::Outline,
                                disabled: !has_next,
                                onclick: move |_| query.write().page += 1,
                                "Next"
                            }
                        }
                    }
                }
            }}
        }

        if let Some(user) = editing() {
            EditUserDialog {
                key: "{user.id}",
                user,
                on_saved: move |updated: UserInfo| {
                    editing.set(None);
                    notice.set(Some(format!("Saved {}.", updated.display_name())));
                    users.restart();
                },
                on_cancel: move |_| editing.set(None),
            }
        }

        if let Some(user) = deleting() {
            ConfirmDialog {
                title: "Delete user",
                message: format!("Delete {} ({})? This cannot be undone.", user.display_name(), user.email),
                busy: deleting_busy(),
                on_confirm: confirm_delete,
                on_cancel: move |_| deleting.set(None),
            }
        }
    }
}

#[component]
fn EditUserDialog(
    user: UserInfo,
    on_saved: EventHandler<UserInfo>,
    on_cancel: EventHandler<()>,
) -> Element {
    let auth = use_admin_auth();
    let mut name = use_signal(|| user.name.clone());
    let mut email = use_signal(|| user.email.clone());
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);
    let id = user.id;

    let handle_save = {
        let user = user.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let user = user.clone();
            spawn(async move {
                error.set(None);
                let n = name();
                let e = email();
                if let Some(message) = first_error([require("Name", &n), validate_email(&e)]) {
                    error.set(Some(message));
                    return;
                }
                let update = UserUpdate {
                    name: n.trim().to_string(),
                    email: e.trim().to_string(),
                };
                saving.set(true);
                let result = make_client(CredentialScope::Admin).update_user(id, &update).await;
                match AfterMutation::from_result(&result) {
                    AfterMutation::Refresh => on_saved.call(UserInfo {
                        name: update.name,
                        email: update.email,
                        ..user
                    }),
                    AfterMutation::Report { message, signed_out } => {
                        if signed_out {
                            end_admin_session(auth).await;
                        }
                        error.set(Some(message));
                    }
                }
                saving.set(false);
            });
        }
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| on_cancel.call(()),
            form {
                class: "p-6 flex flex-col gap-3",
                onsubmit: handle_save,
                h2 { class: "m-0 text-lg font-semibold", "Edit user" }
                div {
                    Label { html_for: "edit-user-name", "Name" }
                    Input {
                        id: "edit-user-name",
                        class: "w-full",
                        value: name(),
                        oninput: move |evt: FormEvent| name.set(evt.value()),
                    }
                }
                div {
                    Label { html_for: "edit-user-email", "Email" }
                    Input {
                        id: "edit-user-email",
                        class: "w-full",
                        r#type: "email",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                }
                if let Some(message) = error() {
                    FormMessage { kind: MessageKind::Error, message }
                }
                div {
                    class: "flex justify-end gap-2 mt-2",
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: saving(),
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    Button { r#type: "submit", disabled: saving(), "Save" }
                }
            }
        }
    }
}
