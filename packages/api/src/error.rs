//! Error taxonomy for calls to the backend.

use thiserror::Error;

/// Message shown when the server gave no usable explanation.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or(GENERIC_ERROR_MESSAGE))]
    Status { status: u16, message: Option<String> },

    /// A 2xx response whose body did not have the expected shape.
    #[error("Unexpected response: {0}")]
    Decode(String),

    /// The request body could not be serialised.
    #[error("Invalid request: {0}")]
    Encode(String),
}

impl ApiError {
    /// Build a status error from a raw response body.
    pub fn from_response(status: u16, body: &str) -> Self {
        Self::Status {
            status,
            message: extract_message(body),
        }
    }

    /// Text to show inline next to the form that triggered the call.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } => message.clone(),
            _ => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }
}

/// Pull a human-readable message out of a JSON error body.
///
/// `error` wins over `message`; blank strings are ignored.
pub fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["error", "message"].iter().find_map(|field| {
        value
            .get(field)
            .and_then(|v| v.as_str())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_field_wins_over_message() {
        let body = r#"{"message":"The given data was invalid.","error":"Email already taken"}"#;
        assert_eq!(extract_message(body).as_deref(), Some("Email already taken"));
    }

    #[test]
    fn test_message_field_used_when_error_missing() {
        let body = r#"{"message":"Invalid credentials"}"#;
        let err = ApiError::from_response(401, body);
        assert_eq!(err.user_message(), "Invalid credentials");
        assert!(err.is_unauthorized());
    }

    #[test]
    fn test_fallback_for_unusable_bodies() {
        for body in ["", "<html>502</html>", r#"{"error":""}"#, r#"{"error":{"code":1}}"#] {
            let err = ApiError::from_response(500, body);
            assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE, "body: {body}");
        }
        assert_eq!(
            ApiError::Network("connection refused".into()).user_message(),
            GENERIC_ERROR_MESSAGE
        );
    }

    #[test]
    fn test_status_helpers() {
        assert_eq!(ApiError::from_response(422, "{}").status(), Some(422));
        assert!(!ApiError::from_response(422, "{}").is_unauthorized());
        assert!(ApiError::from_response(403, "{}").is_unauthorized());
        assert_eq!(ApiError::Decode("x".into()).status(), None);
    }
}
