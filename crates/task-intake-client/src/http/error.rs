/*
[INPUT]:  Error sources (transport, API error bodies, malformed responses, configuration)
[OUTPUT]: Structured error type for the task endpoint client
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

use crate::types::ApiErrorBody;

/// Main error type for the task intake client
#[derive(Error, Debug)]
pub enum TaskApiError {
    /// Request never produced a response (connect, timeout, TLS, ...)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-2xx status
    #[error("API error (status {status}): {}", .body.error.as_deref().unwrap_or("no error message"))]
    Api { status: u16, body: ApiErrorBody },

    /// Backend answered 2xx but the body was not a task record
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl TaskApiError {
    /// True when no HTTP response was received
    pub fn is_transport(&self) -> bool {
        matches!(self, TaskApiError::Http(_))
    }

    /// HTTP status of the failed response, if there was one
    pub fn status(&self) -> Option<u16> {
        match self {
            TaskApiError::Api { status, .. } => Some(*status),
            TaskApiError::Http(err) => err.status().map(|status| status.as_u16()),
            _ => None,
        }
    }

    /// Create an API error from status code and decoded body
    pub fn api_error(status: StatusCode, body: ApiErrorBody) -> Self {
        TaskApiError::Api {
            status: status.as_u16(),
            body,
        }
    }
}

/// Result type alias for task intake client operations
pub type Result<T> = std::result::Result<T, TaskApiError>;
