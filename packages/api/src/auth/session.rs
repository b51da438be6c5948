//! # Session resolution: "is there a valid session, and who is it?"
//!
//! A session is `(token in TokenStore, user in memory)`. The two outcomes of
//! [`ApiClient::resolve_session`] are the only states the UI distinguishes:
//!
//! | Outcome | When | Side effect |
//! |---------|------|-------------|
//! | [`Resolution::Authenticated`] | `GET {scope}/me` succeeded | none |
//! | [`Resolution::SignedOut`] | no stored token, or the call failed for any reason | stored token removed |
//!
//! Failures are logged and never surfaced: a network blip during the check is
//! indistinguishable from an expired token and signs the visitor out.

use store::TokenStore;

use crate::client::ApiClient;
use crate::models::UserInfo;
use crate::transport::Transport;

/// Result of validating the stored credential.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Authenticated(UserInfo),
    SignedOut,
}

impl Resolution {
    pub fn user(&self) -> Option<&UserInfo> {
        match self {
            Resolution::Authenticated(user) => Some(user),
            Resolution::SignedOut => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Resolution::Authenticated(_))
    }
}

impl<T: Transport, S: TokenStore> ApiClient<T, S> {
    /// Validate the stored token against the scope's identity endpoint.
    pub async fn resolve_session(&self) -> Resolution {
        if self.token().await.is_none() {
            tracing::debug!(scope = ?self.scope(), "no stored token");
            return Resolution::SignedOut;
        }

        match self.me().await {
            Ok(user) => Resolution::Authenticated(user),
            Err(e) => {
                tracing::warn!(scope = ?self.scope(), error = %e, "session validation failed");
                self.clear_token().await;
                Resolution::SignedOut
            }
        }
    }

    /// Tear down the session for this scope and return the sign-in path.
    ///
    /// The server call is best-effort; the local token is removed regardless.
    pub async fn logout(&self) -> &'static str {
        if let Err(e) = self.post(self.scoped_path("/logout")).send_unit().await {
            tracing::warn!(scope = ?self.scope(), error = %e, "server logout failed");
        }
        self.clear_token().await;
        self.scope().sign_in_path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::testing::{client, MockTransport, USER_JSON};
    use crate::transport::Method;
    use store::{CredentialScope, MemoryStore};

    #[tokio::test]
    async fn test_no_token_signs_out_without_request() {
        let transport = MockTransport::new();
        let api = client(CredentialScope::User, transport.clone(), MemoryStore::new());

        assert_eq!(api.resolve_session().await, Resolution::SignedOut);
        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn test_valid_token_resolves_user() {
        let transport = MockTransport::new();
        transport.respond(200, USER_JSON);
        let store = MemoryStore::with("token", "good");
        let api = client(CredentialScope::User, transport.clone(), store.clone());

        let resolution = api.resolve_session().await;
        assert!(resolution.is_authenticated());
        assert_eq!(resolution.user().map(|u| u.email.as_str()), Some("ada@example.com"));
        assert_eq!(store.get("token").await.as_deref(), Some("good"));

        let call = &transport.calls()[0];
        assert_eq!(call.method, Method::Get);
        assert_eq!(call.path, "/auth/me");
    }

    #[tokio::test]
    async fn test_rejected_token_is_cleared() {
        let transport = MockTransport::new();
        transport.respond(401, r#"{"message":"Unauthenticated."}"#);
        let store = MemoryStore::with("token", "expired");
        let api = client(CredentialScope::User, transport, store.clone());

        assert_eq!(api.resolve_session().await, Resolution::SignedOut);
        assert!(store.get("token").await.is_none());
    }

    #[tokio::test]
    async fn test_network_failure_is_treated_as_signed_out() {
        let transport = MockTransport::new();
        transport.fail(ApiError::Network("offline".into()));
        let store = MemoryStore::with("token", "maybe-valid");
        let api = client(CredentialScope::User, transport, store.clone());

        assert_eq!(api.resolve_session().await, Resolution::SignedOut);
        assert!(store.get("token").await.is_none());
    }

    #[tokio::test]
    async fn test_undecodable_identity_signs_out() {
        let transport = MockTransport::new();
        transport.respond(200, "<html></html>");
        let store = MemoryStore::with("token", "t");
        let api = client(CredentialScope::User, transport, store.clone());

        assert_eq!(api.resolve_session().await, Resolution::SignedOut);
        assert!(store.get("token").await.is_none());
    }

    #[tokio::test]
    async fn test_admin_failure_leaves_user_session_alone() {
        let transport = MockTransport::new();
        transport.respond(403, "{}");
        let store = MemoryStore::with("token", "user");
        store.set("admin_token", "admin").await;
        let api = client(CredentialScope::Admin, transport.clone(), store.clone());

        assert_eq!(api.resolve_session().await, Resolution::SignedOut);
        assert_eq!(transport.calls()[0].path, "/admin/me");
        assert!(store.get("admin_token").await.is_none());
        assert_eq!(store.get("token").await.as_deref(), Some("user"));
    }

    #[tokio::test]
    async fn test_logout_clears_token_when_server_fails() {
        let transport = MockTransport::new();
        transport.fail(ApiError::Network("offline".into()));
        let store = MemoryStore::with("token", "t");
        let api = client(CredentialScope::User, transport.clone(), store.clone());

        assert_eq!(api.logout().await, "/login");
        assert!(store.get("token").await.is_none());
        assert_eq!(transport.calls()[0].path, "/auth/logout");
    }

    #[tokio::test]
    async fn test_logout_sends_token_then_clears() {
        let transport = MockTransport::new();
        transport.respond(200, "{}");
        let store = MemoryStore::with("admin_token", "adm");
        let api = client(CredentialScope::Admin, transport.clone(), store.clone());

        assert_eq!(api.logout().await, "/admin/login");
        let call = &transport.calls()[0];
        assert_eq!(call.path, "/admin/logout");
        assert_eq!(call.header("Authorization"), Some("Bearer adm"));
        assert!(store.get("admin_token").await.is_none());
    }
}
