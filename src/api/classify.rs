//! Failure classification shared by the JSON gateway and the multipart upload.

use std::net::IpAddr;

use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use super::error::{ApiError, ErrorKind, UPLOAD_FAILED_MESSAGE};
use super::response::{lenient_field_errors, ApiResponse};

pub const REQUEST_ID_HEADER: &str = "X-Request-ID";

/// A response body as read off the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Opaque(String),
}

/// How a response body is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyShape {
    /// Parse as JSON only when the content type says so; a JSON body that
    /// fails to parse is an error.
    Enveloped,
    /// Always try JSON; anything unparseable stays opaque.
    Upload,
}

impl BodyShape {
    pub fn parse(self, content_type: Option<&str>, text: String) -> Result<ResponseBody, ApiError> {
        match self {
            Self::Enveloped => {
                if is_json_content_type(content_type) {
                    serde_json::from_str(&text)
                        .map(ResponseBody::Json)
                        .map_err(ApiError::malformed_response)
                } else {
                    Ok(ResponseBody::Opaque(text))
                }
            }
            Self::Upload => Ok(serde_json::from_str(&text)
                .map(ResponseBody::Json)
                .unwrap_or(ResponseBody::Opaque(text))),
        }
    }

    fn fallback_message(self, status: StatusCode) -> String {
        match self {
            Self::Enveloped => format!(
                "API Error: {}",
                status.canonical_reason().unwrap_or_default()
            ),
            Self::Upload => UPLOAD_FAILED_MESSAGE.to_string(),
        }
    }
}

fn is_json_content_type(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|value| value.contains("application/json"))
}

pub fn content_type(headers: &HeaderMap) -> Option<&str> {
    headers.get(CONTENT_TYPE).and_then(|value| value.to_str().ok())
}

pub fn request_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

/// Turn a non-2xx response into an [`ApiError`].
///
/// The message comes from the body's `message`, then its `error`, then a
/// fallback that depends on `shape`. Opaque bodies of an upload are reported
/// as [`ErrorKind::MalformedLocalRequest`].
pub fn classify_rejection(
    shape: BodyShape,
    status: StatusCode,
    request_id: Option<String>,
    body: ResponseBody,
) -> ApiError {
    let fallback = shape.fallback_message(status);
    let (kind, message, errors, response) = match body {
        ResponseBody::Json(value) => {
            let message = string_field(&value, "message")
                .or_else(|| string_field(&value, "error"))
                .unwrap_or(fallback);
            let errors = lenient_field_errors(&value);
            (ErrorKind::RemoteRejected, message, errors, value)
        }
        ResponseBody::Opaque(text) => match shape {
            BodyShape::Enveloped => {
                let message = if text.is_empty() { fallback } else { text };
                let response = json!({ "message": message });
                (ErrorKind::RemoteRejected, message, None, response)
            }
            BodyShape::Upload => {
                let response = json!({ "message": fallback });
                (ErrorKind::MalformedLocalRequest, fallback, None, response)
            }
        },
    };

    ApiError::new(kind, message, status.as_u16())
        .with_errors(errors)
        .with_response(response)
        .with_request_id(request_id)
}

/// Interpret a 2xx body. The envelope is not validated; only `data` has to
/// fit the caller's `T`.
pub fn into_api_response<T: DeserializeOwned>(body: ResponseBody) -> Result<ApiResponse<T>, ApiError> {
    match body {
        ResponseBody::Json(value) => {
            ApiResponse::from_json(value).map_err(ApiError::malformed_response)
        }
        ResponseBody::Opaque(text) => Ok(ApiResponse::message_only(text)),
    }
}

/// Map a transport-level `reqwest` failure.
pub fn classify_transport(error: &reqwest::Error, endpoint: &str) -> ApiError {
    if error.is_timeout() {
        ApiError::timeout()
    } else if error.is_connect() || error.is_request() {
        ApiError::network_unavailable(is_loopback_endpoint(endpoint))
    } else {
        ApiError::request_failed(error)
    }
}

/// Whether `endpoint` points at this machine.
pub fn is_loopback_endpoint(endpoint: &str) -> bool {
    match reqwest::Url::parse(endpoint) {
        Ok(url) => url.host_str().is_some_and(is_loopback_host),
        Err(_) => endpoint.contains("localhost") || endpoint.contains("127.0.0.1"),
    }
}

fn is_loopback_host(host: &str) -> bool {
    let host = host.trim_start_matches('[').trim_end_matches(']');
    host.eq_ignore_ascii_case("localhost")
        || host
            .parse::<IpAddr>()
            .map(|ip| ip.is_loopback())
            .unwrap_or(false)
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
