//! Client error types
//!
//! Every fallible operation returns [`ClientResult`]. Callers that only need
//! to show something to the user go through [`ClientError::kind`] and
//! [`ClientError::user_message`], or convert into a [`Failure`].

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Fallback text when neither the body nor the transport gave a message
pub const GENERIC_FAILURE: &str = "Request failed";

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection-level failure (DNS, refused, TLS, broken body)
    #[error("Network error: {0}")]
    Transport(String),

    /// The request exceeded the configured timeout
    #[error("Request timed out")]
    Timeout,

    /// HTTP 401; the session has been (or must be) cleared
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// Logical failure: a 2xx body with a false success flag, or a 4xx/5xx
    #[error("Request rejected ({status}): {message}")]
    Rejected {
        status: u16,
        message: String,
        errors: Option<Value>,
    },

    /// Response body did not have the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Session storage could not be read or written
    #[error("Storage error: {0}")]
    Storage(String),

    /// Input rejected before any request was sent
    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout
        } else {
            ClientError::Transport(err.to_string())
        }
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::Storage(err.to_string())
    }
}

/// Coarse failure category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Network or timeout
    Transport,
    /// 401, session gone
    Unauthorized,
    /// The server understood the request and said no
    Logical,
    /// Bad response, bad persisted data or bad input
    Malformed,
}

impl ClientError {
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        ClientError::Rejected {
            status,
            message: message.into(),
            errors: None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::Transport(_) | ClientError::Timeout => ErrorKind::Transport,
            ClientError::Unauthorized { .. } => ErrorKind::Unauthorized,
            ClientError::Rejected { .. } | ClientError::Validation(_) => ErrorKind::Logical,
            ClientError::InvalidResponse(_)
            | ClientError::Serialization(_)
            | ClientError::Storage(_) => ErrorKind::Malformed,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Unauthorized { .. })
    }

    /// Text suitable for a toast or dialog
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Rejected {
                message, errors, ..
            } => {
                if !message.is_empty() {
                    message.clone()
                } else if let Some(errors) = errors {
                    errors_text(errors)
                } else {
                    GENERIC_FAILURE.to_string()
                }
            }
            ClientError::Unauthorized { message } => message.clone(),
            ClientError::Validation(message) => message.clone(),
            other => other.to_string(),
        }
    }

    /// Field-level validation errors sent back by the server, if any
    pub fn errors(&self) -> Option<&Value> {
        match self {
            ClientError::Rejected { errors, .. } => errors.as_ref(),
            _ => None,
        }
    }
}

/// Flatten a server `errors` value into one line
///
/// The backend sends either a string, a list of strings, or a map of field
/// name to list of messages.
pub(crate) fn errors_text(errors: &Value) -> String {
    let mut parts = Vec::new();
    collect_strings(errors, &mut parts);
    if parts.is_empty() {
        GENERIC_FAILURE.to_string()
    } else {
        parts.join("; ")
    }
}

fn collect_strings(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::String(s) if !s.is_empty() => out.push(s.clone()),
        Value::Array(items) => items.iter().for_each(|v| collect_strings(v, out)),
        Value::Object(map) => map.values().for_each(|v| collect_strings(v, out)),
        _ => {}
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Serializable failure handed to presentation layers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<&ClientError> for Failure {
    fn from(err: &ClientError) -> Self {
        Self {
            kind: err.kind(),
            message: err.user_message(),
        }
    }
}

impl From<ClientError> for Failure {
    fn from(err: ClientError) -> Self {
        Failure::from(&err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rejected_prefers_body_message() {
        let err = ClientError::Rejected {
            status: 400,
            message: "Code already exists".into(),
            errors: Some(json!({"code": ["duplicate"]})),
        };
        assert_eq!(err.kind(), ErrorKind::Logical);
        assert_eq!(err.user_message(), "Code already exists");
    }

    #[test]
    fn test_rejected_falls_back_to_errors() {
        let err = ClientError::Rejected {
            status: 400,
            message: String::new(),
            errors: Some(json!({"Username": ["required"], "Email": ["invalid format"]})),
        };
        let text = err.user_message();
        assert!(text.contains("required"));
        assert!(text.contains("invalid format"));
    }

    #[test]
    fn test_kinds() {
        assert_eq!(ClientError::Timeout.kind(), ErrorKind::Transport);
        assert_eq!(
            ClientError::Unauthorized {
                message: "Token expired".into()
            }
            .kind(),
            ErrorKind::Unauthorized
        );
        assert_eq!(
            ClientError::Storage("bad json".into()).kind(),
            ErrorKind::Malformed
        );
    }

    #[test]
    fn test_failure_serializes_snake_case_kind() {
        let failure = Failure::from(ClientError::rejected(200, "Stock not found"));
        let value = serde_json::to_value(&failure).unwrap();
        assert_eq!(value, json!({"kind": "logical", "message": "Stock not found"}));
    }
}
