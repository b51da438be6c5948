//! # API client: credential attachment for outgoing requests
//!
//! [`ApiClient`] pairs a [`Transport`] with a [`TokenStore`] and a
//! [`CredentialScope`]. Every request it builds gets JSON headers and, unless
//! told otherwise, the scope's bearer token from client-side storage.
//!
//! ## Credential priority
//!
//! Each request carries an [`Authorization`] policy:
//!
//! | Policy | Effect |
//! |--------|--------|
//! | [`Authorization::Ambient`] (default) | Attach the scope's stored token, if any. |
//! | [`Authorization::Explicit`] | Attach the given token; the store is not read. |
//! | [`Authorization::Suppressed`] | Send no credential. |
//!
//! A header set by hand with [`RequestBuilder::header`] always wins: the
//! credential is attached only when no `Authorization` header is present yet.
//! [`resolve_authorization`] encodes this rule.

use serde::de::DeserializeOwned;
use serde::Serialize;
use store::{CredentialScope, TokenKeys, TokenStore};

use crate::error::{ApiError, ApiResult};
use crate::transport::{ApiRequest, ApiResponse, Method, Transport};

pub const AUTHORIZATION: &str = "Authorization";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const ACCEPT: &str = "Accept";
const JSON: &str = "application/json";

/// Which credential a single request should carry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Authorization {
    #[default]
    Ambient,
    Explicit(String),
    Suppressed,
}

/// Decide the `Authorization` header value for a request.
///
/// Returns `None` when the request already has the header, or when the
/// policy yields no token.
pub fn resolve_authorization(
    header_present: bool,
    policy: &Authorization,
    ambient: Option<&str>,
) -> Option<String> {
    if header_present {
        return None;
    }
    let token = match policy {
        Authorization::Explicit(token) => Some(token.as_str()),
        Authorization::Ambient => ambient,
        Authorization::Suppressed => None,
    }?;
    Some(format!("Bearer {token}"))
}

/// HTTP client bound to one credential scope.
#[derive(Clone, Debug)]
pub struct ApiClient<T: Transport, S: TokenStore> {
    transport: T,
    tokens: S,
    keys: TokenKeys,
    scope: CredentialScope,
}

impl<T: Transport, S: TokenStore> ApiClient<T, S> {
    pub fn new(transport: T, tokens: S, keys: TokenKeys, scope: CredentialScope) -> Self {
        Self {
            transport,
            tokens,
            keys,
            scope,
        }
    }

    pub fn scope(&self) -> CredentialScope {
        self.scope
    }

    fn token_key(&self) -> &str {
        self.keys.key(self.scope)
    }

    /// The stored bearer token for this client's scope.
    pub async fn token(&self) -> Option<String> {
        self.tokens.get(self.token_key()).await
    }

    pub async fn store_token(&self, token: &str) {
        self.tokens.set(self.token_key(), token).await;
    }

    pub async fn clear_token(&self) {
        self.tokens.remove(self.token_key()).await;
    }

    /// Path of a scope-relative endpoint, e.g. `"/me"` → `"/admin/me"`.
    pub fn scoped_path(&self, suffix: &str) -> String {
        format!("{}{}", self.scope.api_prefix(), suffix)
    }

    pub fn request(&self, method: Method, path: impl Into<String>) -> RequestBuilder<'_, T, S> {
        RequestBuilder {
            client: self,
            request: ApiRequest::new(method, path),
            authorization: Authorization::Ambient,
            error: None,
        }
    }

    pub fn get(&self, path: impl Into<String>) -> RequestBuilder<'_, T, S> {
        self.request(Method::Get, path)
    }

    pub fn post(&self, path: impl Into<String>) -> RequestBuilder<'_, T, S> {
        self.request(Method::Post, path)
    }

    pub fn put(&self, path: impl Into<String>) -> RequestBuilder<'_, T, S> {
        self.request(Method::Put, path)
    }

    pub fn delete(&self, path: impl Into<String>) -> RequestBuilder<'_, T, S> {
        self.request(Method::Delete, path)
    }
}

/// A request under construction.
pub struct RequestBuilder<'a, T: Transport, S: TokenStore> {
    client: &'a ApiClient<T, S>,
    request: ApiRequest,
    authorization: Authorization,
    error: Option<ApiError>,
}

impl<'a, T: Transport, S: TokenStore> RequestBuilder<'a, T, S> {
    pub fn query(mut self, name: &str, value: impl ToString) -> Self {
        self.request.query.push((name.to_string(), value.to_string()));
        self
    }

    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.request.headers.push((name.to_string(), value.into()));
        self
    }

    pub fn json<B: Serialize>(mut self, body: &B) -> Self {
        match serde_json::to_value(body) {
            Ok(value) => self.request.body = Some(value),
            Err(e) => self.error = Some(ApiError::Encode(e.to_string())),
        }
        self
    }

    pub fn authorization(mut self, policy: Authorization) -> Self {
        self.authorization = policy;
        self
    }

    /// Send with a specific token instead of the stored one.
    pub fn bearer(self, token: impl Into<String>) -> Self {
        self.authorization(Authorization::Explicit(token.into()))
    }

    /// Finish headers and return the request exactly as it will be sent.
    pub async fn build(self) -> ApiResult<ApiRequest> {
        if let Some(error) = self.error {
            return Err(error);
        }
        let mut request = self.request;

        let header_present = request.has_header(AUTHORIZATION);
        let ambient = if !header_present && self.authorization == Authorization::Ambient {
            self.client.token().await
        } else {
            None
        };
        if let Some(value) =
            resolve_authorization(header_present, &self.authorization, ambient.as_deref())
        {
            request.headers.push((AUTHORIZATION.to_string(), value));
        }
        if !request.has_header(CONTENT_TYPE) {
            request.headers.push((CONTENT_TYPE.to_string(), JSON.to_string()));
        }
        if !request.has_header(ACCEPT) {
            request.headers.push((ACCEPT.to_string(), JSON.to_string()));
        }
        Ok(request)
    }

    /// Send and return the raw response, mapping non-2xx statuses to errors.
    pub async fn send_raw(self) -> ApiResult<ApiResponse> {
        let client = self.client;
        let request = self.build().await?;
        tracing::debug!(method = request.method.as_str(), path = %request.path, "api request");

        let response = client.transport.send(request).await?;
        if response.is_success() {
            Ok(response)
        } else {
            Err(ApiError::from_response(response.status, &response.body))
        }
    }

    /// Send and decode a JSON body.
    pub async fn send<R: DeserializeOwned>(self) -> ApiResult<R> {
        let response = self.send_raw().await?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Send and ignore the response body.
    pub async fn send_unit(self) -> ApiResult<()> {
        self.send_raw().await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{client, MockTransport};
    use store::MemoryStore;

    #[test]
    fn test_explicit_credential_beats_ambient() {
        let value =
            resolve_authorization(false, &Authorization::Explicit("admin".into()), Some("user"));
        assert_eq!(value.as_deref(), Some("Bearer admin"));
    }

    #[test]
    fn test_existing_header_is_never_overwritten() {
        for policy in [
            Authorization::Ambient,
            Authorization::Explicit("x".into()),
            Authorization::Suppressed,
        ] {
            assert_eq!(resolve_authorization(true, &policy, Some("user")), None);
        }
    }

    #[test]
    fn test_ambient_and_suppressed() {
        assert_eq!(
            resolve_authorization(false, &Authorization::Ambient, Some("t")).as_deref(),
            Some("Bearer t")
        );
        assert_eq!(resolve_authorization(false, &Authorization::Ambient, None), None);
        assert_eq!(
            resolve_authorization(false, &Authorization::Suppressed, Some("t")),
            None
        );
    }

    #[tokio::test]
    async fn test_ambient_token_attached_from_scope_key() {
        let keys = TokenKeys::default();
        let store = MemoryStore::new();
        store.set(&keys.user, "user-token").await;
        store.set(&keys.admin, "admin-token").await;

        let transport = MockTransport::new();
        transport.respond(200, "{}");
        transport.respond(200, "{}");

        let user = client(CredentialScope::User, transport.clone(), store.clone());
        let admin = client(CredentialScope::Admin, transport.clone(), store);
        user.get("/jobs").send_unit().await.unwrap();
        admin.get("/admin/users").send_unit().await.unwrap();

        let calls = transport.calls();
        assert_eq!(calls[0].header(AUTHORIZATION), Some("Bearer user-token"));
        assert_eq!(calls[1].header(AUTHORIZATION), Some("Bearer admin-token"));
    }

    #[tokio::test]
    async fn test_explicit_bearer_overrides_stored_token() {
        let store = MemoryStore::with("token", "ambient");
        let transport = MockTransport::new();
        transport.respond(200, "{}");

        let api = client(CredentialScope::User, transport.clone(), store);
        api.get("/auth/me").bearer("override").send_unit().await.unwrap();

        assert_eq!(
            transport.calls()[0].header(AUTHORIZATION),
            Some("Bearer override")
        );
    }

    #[tokio::test]
    async fn test_manual_header_wins() {
        let store = MemoryStore::with("token", "ambient");
        let transport = MockTransport::new();
        transport.respond(204, "");

        let api = client(CredentialScope::User, transport.clone(), store);
        api.get("/auth/me")
            .header("authorization", "Bearer manual")
            .send_unit()
            .await
            .unwrap();

        let call = &transport.calls()[0];
        assert_eq!(call.header(AUTHORIZATION), Some("Bearer manual"));
        assert_eq!(
            call.headers
                .iter()
                .filter(|(n, _)| n.eq_ignore_ascii_case(AUTHORIZATION))
                .count(),
            1
        );
    }

    #[tokio::test]
    async fn test_json_headers_always_present() {
        let transport = MockTransport::new();
        transport.respond(200, "{}");
        let api = client(CredentialScope::User, transport.clone(), MemoryStore::new());
        api.get("/auth/me").send_unit().await.unwrap();

        let call = &transport.calls()[0];
        assert_eq!(call.header(CONTENT_TYPE), Some("application/json"));
        assert_eq!(call.header(ACCEPT), Some("application/json"));
        assert_eq!(call.header(AUTHORIZATION), None);
    }

    #[tokio::test]
    async fn test_error_status_surfaces_server_message() {
        let transport = MockTransport::new();
        transport.respond(422, r#"{"message":"The email has already been taken."}"#);
        let api = client(CredentialScope::User, transport, MemoryStore::new());

        let err = api.post("/auth/register").send_unit().await.unwrap_err();
        assert_eq!(err.status(), Some(422));
        assert_eq!(err.user_message(), "The email has already been taken.");
    }

    #[tokio::test]
    async fn test_decode_error_on_unexpected_body() {
        let transport = MockTransport::new();
        transport.respond(200, "not json");
        let api = client(CredentialScope::User, transport, MemoryStore::new());

        let err = api
            .get("/auth/me")
            .send::<crate::UserInfo>()
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
