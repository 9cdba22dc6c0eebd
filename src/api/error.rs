use serde::Serialize;
use serde_json::Value;

use super::response::FieldError;

pub const TIMEOUT_MESSAGE: &str =
    "Request timeout. The server took too long to respond. Please try again.";
pub const LOCAL_BACKEND_DOWN_MESSAGE: &str =
    "Backend server is not running. Please start the backend server or check the API configuration.";
pub const NETWORK_ERROR_MESSAGE: &str =
    "Network error. Please check your internet connection and try again.";
pub const BACKEND_UNREACHABLE_MESSAGE: &str = "Backend server is not reachable";
pub const UPLOAD_FAILED_MESSAGE: &str = "Failed to submit application";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// No response within the call budget.
    Timeout,
    /// DNS, refused connection and similar transport failures.
    NetworkUnavailable,
    /// The backend answered with a non-2xx status.
    RemoteRejected,
    /// The request could not be built locally, or an upload error body was
    /// not the expected JSON.
    MalformedLocalRequest,
    /// A JSON content type whose body did not parse.
    MalformedResponse,
    RequestFailed,
}

/// Error returned by every gateway call. `message` is meant to be shown to
/// the end user as-is.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub kind: ErrorKind,
    pub message: String,
    /// HTTP status, `408` for timeouts, `0` when no response was received.
    pub status_code: u16,
    pub errors: Option<Vec<FieldError>>,
    pub response: Option<Value>,
    pub request_id: Option<String>,
}

impl ApiError {
    pub fn new(kind: ErrorKind, message: impl Into<String>, status_code: u16) -> Self {
        Self {
            kind,
            message: message.into(),
            status_code,
            errors: None,
            response: None,
            request_id: None,
        }
    }

    pub fn timeout() -> Self {
        Self::new(ErrorKind::Timeout, TIMEOUT_MESSAGE, 408)
    }

    pub fn network_unavailable(loopback: bool) -> Self {
        let message = if loopback {
            LOCAL_BACKEND_DOWN_MESSAGE
        } else {
            NETWORK_ERROR_MESSAGE
        };
        Self::new(ErrorKind::NetworkUnavailable, message, 0)
    }

    pub fn backend_unreachable() -> Self {
        Self::new(ErrorKind::NetworkUnavailable, BACKEND_UNREACHABLE_MESSAGE, 0)
    }

    pub fn request_failed(detail: impl std::fmt::Display) -> Self {
        Self::new(ErrorKind::RequestFailed, format!("Request failed: {detail}"), 0)
    }

    pub fn malformed_response(detail: impl std::fmt::Display) -> Self {
        Self::new(
            ErrorKind::MalformedResponse,
            format!("Request failed: {detail}"),
            0,
        )
    }

    pub fn malformed_request(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedLocalRequest, message, 0)
    }

    pub fn with_errors(mut self, errors: Option<Vec<FieldError>>) -> Self {
        self.errors = errors;
        self
    }

    pub fn with_response(mut self, response: Value) -> Self {
        self.response = Some(response);
        self
    }

    pub fn with_request_id(mut self, request_id: Option<String>) -> Self {
        self.request_id = request_id;
        self
    }

    pub fn is_timeout(&self) -> bool {
        self.kind == ErrorKind::Timeout
    }

    /// Field-level validation messages, empty when the backend sent none.
    pub fn field_errors(&self) -> &[FieldError] {
        self.errors.as_deref().unwrap_or(&[])
    }
}
