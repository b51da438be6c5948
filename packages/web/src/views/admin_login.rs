use api::CredentialScope;
use dioxus::prelude::*;
use ui::use_admin_auth;

use super::login::SignInForm;
use crate::Route;

#[component]
pub fn AdminLogin() -> Element {
    let auth = use_admin_auth();
    let nav = use_navigator();

    use_effect(move || {
        if auth().is_authenticated() {
            nav.replace(Route::AdminDashboard {});
        }
    });

    rsx! {
        div {
            class: "auth-card",
            h1 { "Admin console" }
            p { class: "text-muted", "Administrator accounts only." }
            SignInForm {
                scope: CredentialScope::Admin,
                on_success: move |_| {
                    nav.push(Route::AdminDashboard {});
                },
            }
        }
    }
}
