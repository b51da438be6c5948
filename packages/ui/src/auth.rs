//! Authentication context and hooks for the UI.
//!
//! [`AuthProvider`] owns one [`AuthState`] signal per credential scope and
//! validates both stored tokens when the app mounts. Pages read them with
//! [`use_auth`] / [`use_admin_auth`]; protected layouts call [`use_session`],
//! which observes the same signal and re-checks the token on later mounts.

use api::{CredentialScope, Resolution, UserInfo};
use dioxus::prelude::*;

use crate::make_client;

/// Session state for one credential scope.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn signed_in(user: UserInfo) -> Self {
        Self {
            user: Some(user),
            loading: false,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            user: None,
            loading: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// A check has finished, with or without a user.
    pub fn is_settled(&self) -> bool {
        !self.loading
    }

    /// Settled and without a user: the caller should be sent to sign-in.
    pub fn needs_sign_in(&self) -> bool {
        !self.loading && self.user.is_none()
    }
}

impl From<Resolution> for AuthState {
    fn from(resolution: Resolution) -> Self {
        match resolution {
            Resolution::Authenticated(user) => Self::signed_in(user),
            Resolution::SignedOut => Self::signed_out(),
        }
    }
}

#[derive(Clone, Copy)]
struct Sessions {
    user: Signal<AuthState>,
    admin: Signal<AuthState>,
}

/// Job seeker session state.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Sessions>().user
}

/// Administrator session state.
pub fn use_admin_auth() -> Signal<AuthState> {
    use_context::<Sessions>().admin
}

pub fn use_scope_auth(scope: CredentialScope) -> Signal<AuthState> {
    match scope {
        CredentialScope::User => use_auth(),
        CredentialScope::Admin => use_admin_auth(),
    }
}

/// Provider component that holds both session signals.
/// Wrap your app with this component to enable authentication.
///
/// Stored tokens are validated once on mount. A signed-out result only
/// updates the signal; redirecting is left to the protected layouts.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut user = use_signal(AuthState::default);
    let mut admin = use_signal(AuthState::default);
    use_context_provider(|| Sessions { user, admin });

    let _ = use_resource(move || async move {
        user.set(check_scope(CredentialScope::User).await);
    });
    let _ = use_resource(move || async move {
        admin.set(check_scope(CredentialScope::Admin).await);
    });

    rsx! {
        {children}
    }
}

async fn check_scope(scope: CredentialScope) -> AuthState {
    AuthState::from(make_client(scope).resolve_session().await)
}

/// Session signal for `scope`, as observed by a protected layout.
///
/// This is the shared context signal, so a signed-out state written by any
/// page (a rejected token, a logout) reaches the layout. While the
/// provider's first check is pending nothing extra runs; a layout mounted
/// after that re-validates the stored token. Dropping the component cancels
/// a pending check.
pub fn use_session(scope: CredentialScope) -> Signal<AuthState> {
    let mut session = use_scope_auth(scope);
    let recheck = use_hook(|| session.peek().is_settled());

    let _ = use_resource(move || async move {
        if recheck {
            session.set(check_scope(scope).await);
        }
    });

    session
}

/// Send the browser to `path`.
pub fn redirect(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!(path, "redirect requested outside the browser");
    }
}

/// Log out of `scope`: best-effort server call, token removal, cleared
/// session signal, then a full navigation to the scope's sign-in page.
///
/// The returned signal is true while the logout is in flight.
pub fn use_logout(scope: CredentialScope) -> (Signal<bool>, impl FnMut() + Copy) {
    let mut auth_state = use_scope_auth(scope);
    let mut pending = use_signal(|| false);

    let logout = move || {
        if pending() {
            return;
        }
        pending.set(true);
        spawn(async move {
            let sign_in = make_client(scope).logout().await;
            auth_state.set(AuthState::signed_out());
            pending.set(false);
            redirect(sign_in);
        });
    };

    (pending, logout)
}

/// Button to log out of one credential scope.
#[component]
pub fn LogoutButton(
    #[props(default = CredentialScope::User)] scope: CredentialScope,
    #[props(default = "Log out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let (pending, mut logout) = use_logout(scope);

    rsx! {
        button {
            class: "{class}",
            disabled: pending(),
            onclick: move |_| logout(),
            "{label}"
        }
    }
}
