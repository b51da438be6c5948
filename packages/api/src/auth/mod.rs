//! User-facing authentication endpoints (`/auth/*`).
//!
//! `login`, `me` and `logout` are scope-relative: on an admin-scoped client
//! they hit `/admin/login`, `/admin/me` and `/admin/logout` and store the
//! token under the admin key. Everything else is only meaningful for the
//! user scope.

mod session;

pub use session::Resolution;

use serde::Serialize;
use store::TokenStore;

use crate::client::{ApiClient, Authorization};
use crate::error::ApiResult;
use crate::models::{LoginResponse, MeResponse, MessageResponse, ProfileUpdate, UserInfo};
use crate::transport::Transport;

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct Registration<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
    password_confirmation: &'a str,
}

#[derive(Serialize)]
struct EmailOnly<'a> {
    email: &'a str,
}

#[derive(Serialize)]
struct OtpVerification<'a> {
    email: &'a str,
    otp: &'a str,
}

#[derive(Serialize)]
struct PasswordReset<'a> {
    email: &'a str,
    token: &'a str,
    password: &'a str,
    password_confirmation: &'a str,
}

#[derive(Serialize)]
struct PasswordChange<'a> {
    current_password: &'a str,
    password: &'a str,
    password_confirmation: &'a str,
}

impl<T: Transport, S: TokenStore> ApiClient<T, S> {
    /// Sign in and persist the returned token for this client's scope.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<UserInfo> {
        let resp: LoginResponse = self
            .post(self.scoped_path("/login"))
            .json(&Credentials {
                email: email.trim(),
                password,
            })
            .send()
            .await?;
        self.store_token(&resp.token).await;
        Ok(resp.user)
    }

    /// Fetch the signed-in identity for this client's scope.
    pub async fn me(&self) -> ApiResult<UserInfo> {
        let resp: MeResponse = self.get(self.scoped_path("/me")).send().await?;
        Ok(resp.into_user())
    }

    /// Create an account. The backend emails an OTP; no token is issued yet.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        password_confirmation: &str,
    ) -> ApiResult<MessageResponse> {
        let resp = self
            .post("/auth/register")
            .authorization(Authorization::Suppressed)
            .json(&Registration {
                name: name.trim(),
                email: email.trim(),
                password,
                password_confirmation,
            })
            .send_raw()
            .await?;
        Ok(MessageResponse::from_body(&resp.body))
    }

    /// Confirm the signup OTP; on success the user is signed in.
    pub async fn verify_otp(&self, email: &str, otp: &str) -> ApiResult<UserInfo> {
        let resp: LoginResponse = self
            .post("/auth/verify-otp")
            .json(&OtpVerification {
                email: email.trim(),
                otp,
            })
            .send()
            .await?;
        self.store_token(&resp.token).await;
        Ok(resp.user)
    }

    pub async fn resend_otp(&self, email: &str) -> ApiResult<MessageResponse> {
        self.acknowledge("/auth/resend-otp", &EmailOnly { email: email.trim() })
            .await
    }

    pub async fn forgot_password(&self, email: &str) -> ApiResult<MessageResponse> {
        self.acknowledge("/auth/forgot-password", &EmailOnly { email: email.trim() })
            .await
    }

    pub async fn reset_password(
        &self,
        email: &str,
        token: &str,
        password: &str,
        password_confirmation: &str,
    ) -> ApiResult<MessageResponse> {
        self.acknowledge(
            "/auth/reset-password",
            &PasswordReset {
                email: email.trim(),
                token,
                password,
                password_confirmation,
            },
        )
        .await
    }

    pub async fn update_profile(&self, update: &ProfileUpdate) -> ApiResult<UserInfo> {
        let resp: MeResponse = self.put("/auth/profile").json(update).send().await?;
        Ok(resp.into_user())
    }

    pub async fn change_password(
        &self,
        current_password: &str,
        password: &str,
        password_confirmation: &str,
    ) -> ApiResult<MessageResponse> {
        self.acknowledge(
            "/auth/change-password",
            &PasswordChange {
                current_password,
                password,
                password_confirmation,
            },
        )
        .await
    }

    async fn acknowledge<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<MessageResponse> {
        let resp = self.post(path).json(body).send_raw().await?;
        Ok(MessageResponse::from_body(&resp.body))
    }
}
