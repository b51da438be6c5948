//! Recording transport for unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use store::{CredentialScope, MemoryStore, TokenKeys};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::transport::{ApiRequest, ApiResponse, Transport};

/// Records every request and replays queued responses in order.
#[derive(Clone, Debug, Default)]
pub struct MockTransport {
    calls: Arc<Mutex<Vec<ApiRequest>>>,
    responses: Arc<Mutex<VecDeque<Result<ApiResponse, ApiError>>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: &str) {
        self.responses.lock().unwrap().push_back(Ok(ApiResponse {
            status,
            body: body.to_string(),
        }));
    }

    pub fn fail(&self, error: ApiError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub fn calls(&self) -> Vec<ApiRequest> {
        self.calls.lock().unwrap().clone()
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.calls.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no response queued".to_string())))
    }
}

pub fn client(
    scope: CredentialScope,
    transport: MockTransport,
    store: MemoryStore,
) -> ApiClient<MockTransport, MemoryStore> {
    ApiClient::new(transport, store, TokenKeys::default(), scope)
}

pub const USER_JSON: &str = r#"{"id":7,"name":"Ada Lovelace","email":"ada@example.com","email_verified_at":"2024-01-01T00:00:00Z","created_at":"2024-01-01T00:00:00Z"}"#;
