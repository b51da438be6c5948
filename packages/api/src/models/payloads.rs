//! Request and response bodies beyond the user record itself.

use serde::{Deserialize, Serialize};

use super::UserInfo;

/// Successful login or OTP verification.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoginResponse {
    #[serde(alias = "access_token")]
    pub token: String,
    pub user: UserInfo,
    #[serde(default)]
    pub message: Option<String>,
}

/// Endpoints that only acknowledge, e.g. register or resend-otp.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

impl MessageResponse {
    /// Lenient parse: empty or non-JSON bodies yield no message.
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }
}

/// A server-side page of results (Laravel paginator shape).
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    #[serde(default = "first_page")]
    pub current_page: u32,
    #[serde(default = "first_page")]
    pub last_page: u32,
    #[serde(default)]
    pub per_page: u32,
    #[serde(default)]
    pub total: u64,
}

fn first_page() -> u32 {
    1
}

impl<T> Paginated<T> {
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.last_page
    }
}

/// Verification filter for the admin users table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UserStatus {
    #[default]
    All,
    Verified,
    Unverified,
}

impl UserStatus {
    /// Query parameter value; `None` means the parameter is omitted.
    pub fn as_param(&self) -> Option<&'static str> {
        match self {
            UserStatus::All => None,
            UserStatus::Verified => Some("verified"),
            UserStatus::Unverified => Some("unverified"),
        }
    }

    pub fn from_param(value: &str) -> Self {
        match value {
            "verified" => UserStatus::Verified,
            "unverified" => UserStatus::Unverified,
            _ => UserStatus::All,
        }
    }
}

/// Parameters for `GET /admin/users`.
#[derive(Debug, Clone, PartialEq)]
pub struct UserQuery {
    pub page: u32,
    pub per_page: u32,
    pub search: String,
    pub status: UserStatus,
}

impl Default for UserQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 10,
            search: String::new(),
            status: UserStatus::All,
        }
    }
}

/// Admin edit of a user row.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UserUpdate {
    pub name: String,
    pub email: String,
}

/// A user's own profile edit.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_accepts_access_token() {
        let resp: LoginResponse = serde_json::from_str(
            r#"{"access_token":"abc","user":{"id":1,"name":"A","email":"a@example.com"}}"#,
        )
        .unwrap();
        assert_eq!(resp.token, "abc");
        assert!(resp.message.is_none());
    }

    #[test]
    fn test_paginator_defaults_and_navigation() {
        let page: Paginated<UserInfo> = serde_json::from_str(
            r#"{"data":[],"current_page":2,"last_page":3,"per_page":10,"total":25}"#,
        )
        .unwrap();
        assert!(page.has_previous());
        assert!(page.has_next());

        let bare: Paginated<UserInfo> = serde_json::from_str(r#"{"data":[]}"#).unwrap();
        assert_eq!(bare.current_page, 1);
        assert!(!bare.has_previous());
        assert!(!bare.has_next());
    }

    #[test]
    fn test_message_response_is_lenient() {
        assert_eq!(MessageResponse::from_body("").message, None);
        assert_eq!(
            MessageResponse::from_body(r#"{"message":"OTP sent"}"#).message.as_deref(),
            Some("OTP sent")
        );
    }

    #[test]
    fn test_status_param() {
        assert_eq!(UserStatus::All.as_param(), None);
        assert_eq!(UserStatus::from_param("verified"), UserStatus::Verified);
        assert_eq!(UserStatus::from_param("bogus"), UserStatus::All);
    }

    #[test]
    fn test_profile_update_omits_missing_phone() {
        let body = serde_json::to_value(ProfileUpdate {
            name: "A".into(),
            email: "a@example.com".into(),
            phone: None,
        })
        .unwrap();
        assert!(body.get("phone").is_none());
    }
}
