//! Site chrome and the two protected route layouts.

use api::CredentialScope;
use dioxus::prelude::*;
use ui::{use_auth, use_session, AuthState, Footer, LogoutButton, Navbar};

use crate::Route;

#[component]
pub fn SiteLayout() -> Element {
    let auth = use_auth();

    rsx! {
        Navbar {
            actions: rsx! {
                if auth().is_authenticated() {
                    LogoutButton { class: "btn btn-outline" }
                } else {
                    Link { class: "btn btn-ghost", to: Route::Login {}, "Sign in" }
                    Link { class: "btn btn-primary", to: Route::Register {}, "Create account" }
                }
            },
            Link { to: Route::Home {}, "Home" }
            Link { to: Route::About {}, "About" }
            if auth().is_authenticated() {
                Link { to: Route::Dashboard {}, "Jobs" }
                Link { to: Route::Profile {}, "Profile" }
            }
        }
        main {
            class: "page",
            Outlet::<Route> {}
        }
        Footer {
            Link { to: Route::About {}, "About" }
            Link { to: Route::AdminLogin {}, "Employers" }
        }
    }
}

/// Replace the route with `sign_in` once `session` settles signed out.
fn use_sign_in_redirect(session: Signal<AuthState>, sign_in: Route) {
    let nav = use_navigator();
    use_effect(move || {
        if session().needs_sign_in() {
            nav.replace(sign_in.clone());
        }
    });
}

#[component]
pub fn UserLayout() -> Element {
    let session = use_session(CredentialScope::User);
    use_sign_in_redirect(session, Route::Login {});

    // Nothing renders until the stored token is confirmed.
    if !session().is_authenticated() {
        return rsx! {};
    }
    rsx! { Outlet::<Route> {} }
}

#[component]
pub fn AdminLayout() -> Element {
    let session = use_session(CredentialScope::Admin);
    use_sign_in_redirect(session, Route::AdminLogin {});

    let Some(admin) = session().user else {
        return rsx! {};
    };
    let name = admin.display_name().to_string();

    rsx! {
        div {
            class: "admin-shell",
            div {
                class: "admin-bar",
                span { class: "font-semibold", "Admin" }
                Link { to: Route::AdminDashboard {}, "Users" }
                Link { to: Route::AdminJobs {}, "Job postings" }
                span { class: "flex-1" }
                span { class: "text-sm text-muted", "{name}" }
                LogoutButton { scope: CredentialScope::Admin, class: "btn btn-outline" }
            }
            Outlet::<Route> {}
        }
    }
}
