//! # API crate: the session boundary between the frontend and the backend
//!
//! Every screen talks to the external REST backend through this crate. It
//! knows how to attach credentials, which endpoints exist, and how to turn a
//! stored token into "who is signed in".
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`transport`] | The [`Transport`] seam and its reqwest implementation, [`HttpTransport`] |
//! | [`client`] | [`ApiClient`]: JSON headers plus bearer-token attachment with an explicit priority rule |
//! | [`auth`] | `/auth/*` endpoints, session resolution and logout |
//! | [`admin`] | `/admin/users` listing, edit and delete |
//! | [`models`] | Wire types: [`UserInfo`], paginators, request bodies |
//! | [`error`] | [`ApiError`] and server-message extraction |
//!
//! ## Credential scopes
//!
//! An [`ApiClient`] is bound to one [`CredentialScope`]. A user-scoped and an
//! admin-scoped client read and write different storage keys, so both
//! sessions can coexist in one browser. Scope-relative endpoints (`login`,
//! `me`, `logout`) pick `/auth` or `/admin` from the scope.

pub mod admin;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;
pub mod transport;

#[cfg(test)]
mod testing;

pub use auth::Resolution;
pub use client::{resolve_authorization, ApiClient, Authorization, RequestBuilder};
pub use error::{ApiError, ApiResult, GENERIC_ERROR_MESSAGE};
pub use models::{
    LoginResponse, MessageResponse, Paginated, ProfileUpdate, UserInfo, UserQuery, UserStatus,
    UserUpdate,
};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method, Transport};

pub use store::{CredentialScope, TokenKeys, TokenStore};
