/*
[INPUT]:  Task endpoint schema and serde requirements
[OUTPUT]: Typed Rust response structs with lenient error-body decoding
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When success or error body shapes change
*/

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::models::Task;

/// Success body of the create-task endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTaskResponse {
    pub task: Task,
}

/// Error body returned with non-2xx responses.
///
/// Decoded leniently: `error` is kept only when it is a string and each entry
/// of `details` is read on its own, so one odd entry never hides the rest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct ApiErrorBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<ErrorDetail>,
}

impl From<Value> for ApiErrorBody {
    fn from(value: Value) -> Self {
        let error = match value.get("error") {
            Some(Value::String(message)) => Some(message.clone()),
            Some(Value::Null) | None => None,
            Some(other) => {
                tracing::debug!(error = %other, "ignoring non-string error message");
                None
            }
        };
        let details = match value.get("details") {
            Some(Value::Array(entries)) => {
                entries.iter().filter_map(ErrorDetail::from_value).collect()
            }
            Some(Value::String(message)) => vec![ErrorDetail::Text(message.clone())],
            Some(Value::Null) | None => Vec::new(),
            Some(other) => {
                tracing::debug!(details = %other, "ignoring details of unexpected shape");
                Vec::new()
            }
        };
        ApiErrorBody { error, details }
    }
}

/// One entry of `details`.
///
/// Older backends send free text such as `"Title is required"`; newer ones
/// may name the offending field explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Field { field: String, message: String },
    Text(String),
}

impl ErrorDetail {
    fn from_value(entry: &Value) -> Option<Self> {
        match entry {
            Value::String(message) => Some(ErrorDetail::Text(message.clone())),
            Value::Object(fields) => match (fields.get("field"), fields.get("message")) {
                (Some(Value::String(field)), Some(Value::String(message))) => {
                    Some(ErrorDetail::Field {
                        field: field.clone(),
                        message: message.clone(),
                    })
                }
                _ => {
                    tracing::debug!(
                        detail = %entry,
                        "skipping error detail without field and message"
                    );
                    None
                }
            },
            _ => {
                tracing::debug!(detail = %entry, "skipping error detail of unexpected type");
                None
            }
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ErrorDetail::Field { message, .. } => message,
            ErrorDetail::Text(message) => message,
        }
    }
}

impl From<&str> for ErrorDetail {
    fn from(value: &str) -> Self {
        ErrorDetail::Text(value.to_string())
    }
}
