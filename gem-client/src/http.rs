//! HTTP transport
//!
//! [`HttpTransport`] moves one request over the wire and hands back the raw
//! status and JSON body. [`normalize`] turns that into the client's error
//! taxonomy; it is the only place that knows about the backend's
//! success-flag convention.

use std::time::Duration;

use async_trait::async_trait;
use http::{Method, StatusCode};
use reqwest::Client;
use serde_json::Value;
use uuid::Uuid;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult, GENERIC_FAILURE, errors_text};

/// Header the backend sets on 401 when the bearer token has expired
pub const TOKEN_EXPIRED_HEADER: &str = "token-expired";

/// Header carrying the client-side request id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// One outgoing API call
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub request_id: Uuid,
    pub method: Method,
    /// Path relative to the base URL, e.g. `api/branch/list`
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    pub token: Option<String>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            token: None,
        }
    }

    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }
}

/// What came back, before any interpretation
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    /// `token-expired` header was present
    pub token_expired: bool,
    /// Parsed JSON body; `Null` when empty, `String` when not JSON
    pub body: Value,
}

impl RawResponse {
    pub fn ok(body: Value) -> Self {
        Self {
            status: 200,
            token_expired: false,
            body,
        }
    }

    pub fn status(status: u16, body: Value) -> Self {
        Self {
            status,
            token_expired: false,
            body,
        }
    }
}

/// Wire-level transport
///
/// Implementations only report connection problems as errors; every HTTP
/// status, including 4xx/5xx, comes back as a [`RawResponse`].
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: &ApiRequest) -> ClientResult<RawResponse>;
}

/// Interpret a raw response
///
/// - 2xx with `isSuccess:false` or `success:false` is a logical rejection
/// - 401 is `Unauthorized`, "Token expired" when the header says so
/// - any other non-2xx is a rejection carrying the body message
pub fn normalize(raw: RawResponse) -> ClientResult<Value> {
    let status = raw.status;

    if (200..300).contains(&status) {
        if success_flag(&raw.body) == Some(false) {
            return Err(ClientError::Rejected {
                status,
                message: body_message(&raw.body).unwrap_or_else(|| GENERIC_FAILURE.to_string()),
                errors: body_errors(&raw.body),
            });
        }
        return Ok(raw.body);
    }

    if status == StatusCode::UNAUTHORIZED.as_u16() {
        let message = if raw.token_expired {
            "Token expired".to_string()
        } else {
            body_message(&raw.body).unwrap_or_else(|| "Unauthorized".to_string())
        };
        return Err(ClientError::Unauthorized { message });
    }

    let errors = body_errors(&raw.body);
    let message = body_message(&raw.body)
        .or_else(|| errors.as_ref().map(errors_text))
        .unwrap_or_else(|| format!("Request failed with status code {status}"));
    Err(ClientError::Rejected {
        status,
        message,
        errors,
    })
}

/// `isSuccess` wins over `success` when both are present
pub(crate) fn success_flag(body: &Value) -> Option<bool> {
    body.get("isSuccess")
        .and_then(Value::as_bool)
        .or_else(|| body.get("success").and_then(Value::as_bool))
}

fn body_message(body: &Value) -> Option<String> {
    let text = match body {
        Value::String(s) => Some(s.as_str()),
        other => other.get("message").and_then(Value::as_str),
    };
    text.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn body_errors(body: &Value) -> Option<Value> {
    body.get("errors").filter(|v| !v.is_null()).cloned()
}

/// reqwest-backed transport
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
}

impl NetworkHttpClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        Self::with_timeout(&config.base_url, config.timeout())
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> ClientResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl HttpTransport for NetworkHttpClient {
    async fn send(&self, request: &ApiRequest) -> ClientResult<RawResponse> {
        let mut req = self
            .client
            .request(request.method.clone(), self.url(&request.path))
            .header(REQUEST_ID_HEADER, request.request_id.to_string());

        if !request.query.is_empty() {
            req = req.query(&request.query);
        }
        if let Some(token) = &request.token {
            req = req.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            req = req.json(body);
        }

        let response = req.send().await?;
        let status = response.status().as_u16();
        let token_expired = response.headers().contains_key(TOKEN_EXPIRED_HEADER);
        let bytes = response.bytes().await?;

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            match serde_json::from_slice(&bytes) {
                Ok(value) => value,
                Err(e) if (200..300).contains(&status) => {
                    return Err(ClientError::InvalidResponse(format!(
                        "{} {}: {}",
                        request.method, request.path, e
                    )));
                }
                Err(_) => Value::String(String::from_utf8_lossy(&bytes).into_owned()),
            }
        };

        Ok(RawResponse {
            status,
            token_expired,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_flag_false_is_rejection() {
        let err = normalize(RawResponse::ok(json!({
            "isSuccess": false,
            "message": "Duplicate code"
        })))
        .unwrap_err();
        match err {
            ClientError::Rejected {
                status, message, ..
            } => {
                assert_eq!(status, 200);
                assert_eq!(message, "Duplicate code");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_success_spelling_false_is_rejection() {
        let err = normalize(RawResponse::ok(json!({"success": false}))).unwrap_err();
        assert_eq!(err.user_message(), GENERIC_FAILURE);
    }

    #[test]
    fn test_null_is_success_falls_back_to_success() {
        assert_eq!(
            success_flag(&json!({"isSuccess": null, "success": false})),
            Some(false)
        );
        assert_eq!(
            success_flag(&json!({"isSuccess": true, "success": false})),
            Some(true)
        );
        assert!(normalize(RawResponse::ok(json!({"isSuccess": null, "success": false}))).is_err());
    }

    #[test]
    fn test_plain_list_body_passes() {
        let body = json!({"data": [], "total": 0});
        assert_eq!(normalize(RawResponse::ok(body.clone())).unwrap(), body);
    }

    #[test]
    fn test_unauthorized_token_expired() {
        let raw = RawResponse {
            status: 401,
            token_expired: true,
            body: json!({"message": "whatever"}),
        };
        match normalize(raw).unwrap_err() {
            ClientError::Unauthorized { message } => assert_eq!(message, "Token expired"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_unauthorized_uses_body_message() {
        let raw = RawResponse::status(401, json!({"message": "User is inactive or not found"}));
        assert_eq!(
            normalize(raw).unwrap_err().user_message(),
            "User is inactive or not found"
        );
    }

    #[test]
    fn test_server_error_uses_errors_when_no_message() {
        let raw = RawResponse::status(400, json!({"errors": {"NameTh": ["required"]}}));
        let err = normalize(raw).unwrap_err();
        assert_eq!(err.user_message(), "required");
        assert!(err.errors().is_some());
    }

    #[test]
    fn test_server_error_without_body() {
        let err = normalize(RawResponse::status(504, Value::Null)).unwrap_err();
        assert_eq!(err.user_message(), "Request failed with status code 504");
    }

    #[test]
    fn test_url_join() {
        let client =
            NetworkHttpClient::with_timeout("https://localhost:7001/", Duration::from_secs(1))
                .unwrap();
        assert_eq!(client.url("api/login"), "https://localhost:7001/api/login");
        assert_eq!(client.url("/api/login"), "https://localhost:7001/api/login");
    }
}
