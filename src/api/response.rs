use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single field-level validation message from the backend.
///
/// Validator-style `{path, msg}` and `{param, msg}` entries are accepted too.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FieldError {
    #[serde(alias = "path", alias = "param")]
    pub field: String,
    #[serde(alias = "msg")]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl FieldError {
    /// Read one entry of an `errors` array. A bare string becomes a message
    /// without a field; anything else unreadable is `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(message) => Some(Self {
                field: String::new(),
                message: message.clone(),
                value: None,
            }),
            other => serde_json::from_value(other.clone()).ok(),
        }
    }
}

/// Readable entries of an `errors` array, `None` when the body has no array.
pub(crate) fn lenient_field_errors(body: &Value) -> Option<Vec<FieldError>> {
    let entries = body.get("errors")?.as_array()?;
    Some(entries.iter().filter_map(FieldError::from_value).collect())
}

/// Envelope every backend JSON endpoint answers with.
///
/// Successful bodies are read leniently: a `success` that is not a bool reads
/// as `false`, unreadable `errors` entries are dropped, and the whole body is
/// kept in `raw`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ApiResponse<T = Value> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
    #[serde(skip)]
    pub raw: Value,
}

impl<T> ApiResponse<T> {
    pub fn message_only(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            success: false,
            raw: Value::String(message.clone()),
            message: Some(message),
            data: None,
            errors: None,
        }
    }
}

impl<T: DeserializeOwned> ApiResponse<T> {
    /// Read an envelope out of a JSON body.
    ///
    /// Only `data` is checked against `T`; with the default `T = Value` this
    /// never fails.
    pub fn from_json(body: Value) -> Result<Self, serde_json::Error> {
        let data = match body.get("data") {
            None | Some(Value::Null) => None,
            Some(data) => Some(serde_json::from_value(data.clone())?),
        };
        Ok(Self {
            success: body.get("success").and_then(Value::as_bool).unwrap_or(false),
            message: body
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string),
            data,
            errors: lenient_field_errors(&body),
            raw: body,
        })
    }
}
