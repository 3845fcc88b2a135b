//! Failures reported by the users API.

use serde_json::Value;
use thiserror::Error;

/// Error returned by a [`UsersApi`](super::UsersApi) call.
///
/// `Response` keeps the server's error body verbatim; nothing is normalized
/// or classified for retry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("server responded with {status}: {}", render_payload(.data))]
    Response { status: u16, data: Value },

    /// No response was received (connection refused, reset, DNS, ...).
    #[error("request failed: {0}")]
    Transport(String),

    /// A success response carried a body that could not be decoded.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// The payload as shown to the user: the server body for `Response`,
    /// the message otherwise.
    pub fn payload(&self) -> String {
        match self {
            ApiError::Response { data, .. } => render_payload(data),
            ApiError::Transport(message) | ApiError::Decode(message) => message.clone(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

fn render_payload(data: &Value) -> String {
    match data {
        Value::String(text) => text.clone(),
        Value::Null => "empty response".to_string(),
        other => other.to_string(),
    }
}
