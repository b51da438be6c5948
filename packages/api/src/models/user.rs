//! # User records
//!
//! [`UserInfo`] is the single user shape the backend returns, whether from
//! `/auth/me`, `/admin/me`, a login response, or a row of the admin users
//! table. Optional fields default to `None` so partial payloads still decode.
//!
//! [`MeResponse`] accepts both a bare user object and one wrapped as
//! `{ "user": { ... } }`.

use serde::{Deserialize, Serialize};

/// A user as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email_verified_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl UserInfo {
    /// Get display name, falling back to email if name is not set.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }

    pub fn is_verified(&self) -> bool {
        self.email_verified_at.is_some()
    }

    /// Date portion of `created_at` ("2024-03-01T10:00:00Z" → "2024-03-01").
    pub fn joined_on(&self) -> Option<&str> {
        let created = self.created_at.as_deref()?;
        Some(created.split(['T', ' ']).next().unwrap_or(created))
    }
}

/// Body of a "who am I" response.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum MeResponse {
    Wrapped { user: UserInfo },
    Bare(UserInfo),
}

impl MeResponse {
    pub fn into_user(self) -> UserInfo {
        match self {
            MeResponse::Wrapped { user } | MeResponse::Bare(user) => user,
        }
    }
}
