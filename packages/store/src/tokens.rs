//! # Credential storage: the client-side half of a session
//!
//! A session token is the only piece of session state that outlives a page
//! load. It is written after a successful login or OTP verification and
//! removed on logout or when the server rejects it.
//!
//! Two independent namespaces exist side by side so a job seeker and an
//! administrator can be signed in from the same browser: [`CredentialScope::User`]
//! and [`CredentialScope::Admin`]. Each scope maps to its own storage key via
//! [`TokenKeys`].
//!
//! Backends implement [`TokenStore`]:
//!
//! | Backend | Platform |
//! |---------|----------|
//! | [`crate::LocalStore`] | Browser `localStorage` (wasm + `web` feature) |
//! | [`crate::FileStore`] | Native builds, one file per key |
//! | [`crate::MemoryStore`] | Tests |

use serde::{Deserialize, Serialize};

use crate::config::SessionConfig;

/// Async key/value interface for persisted credentials.
pub trait TokenStore {
    fn get(&self, key: &str) -> impl std::future::Future<Output = Option<String>>;
    fn set(&self, key: &str, value: &str) -> impl std::future::Future<Output = ()>;
    fn remove(&self, key: &str) -> impl std::future::Future<Output = ()>;
}

/// Which session a request or token belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CredentialScope {
    User,
    Admin,
}

impl CredentialScope {
    /// Route the UI sends a signed-out visitor to.
    pub fn sign_in_path(&self) -> &'static str {
        match self {
            CredentialScope::User => "/login",
            CredentialScope::Admin => "/admin/login",
        }
    }

    /// Path prefix of this scope's backend endpoints.
    pub fn api_prefix(&self) -> &'static str {
        match self {
            CredentialScope::User => "/auth",
            CredentialScope::Admin => "/admin",
        }
    }
}

/// Storage keys for each credential scope.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenKeys {
    pub user: String,
    pub admin: String,
}

impl TokenKeys {
    pub fn key(&self, scope: CredentialScope) -> &str {
        match scope {
            CredentialScope::User => &self.user,
            CredentialScope::Admin => &self.admin,
        }
    }
}

impl Default for TokenKeys {
    fn default() -> Self {
        SessionConfig::default().token_keys()
    }
}

impl From<&SessionConfig> for TokenKeys {
    fn from(config: &SessionConfig) -> Self {
        config.token_keys()
    }
}
