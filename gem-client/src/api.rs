//! Authenticated API client
//!
//! Wraps an [`HttpTransport`] with everything every call needs: the bearer
//! token from the session, a request id, the loading indicator, response
//! normalization, and the session wipe on 401.

use std::sync::Arc;

use http::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ClientError, ClientResult};
use crate::http::{ApiRequest, HttpTransport, normalize};
use crate::loading::LoadingTracker;
use crate::session::SessionStore;

#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn HttpTransport>,
    session: SessionStore,
    loading: LoadingTracker,
    skip_loading: bool,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("session", &self.session)
            .field("skip_loading", &self.skip_loading)
            .finish()
    }
}

impl ApiClient {
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        session: SessionStore,
        loading: LoadingTracker,
    ) -> Self {
        Self {
            transport,
            session,
            loading,
            skip_loading: false,
        }
    }

    /// Same client, but its calls do not drive the loading indicator
    pub fn without_loading(&self) -> Self {
        Self {
            skip_loading: true,
            ..self.clone()
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn loading(&self) -> &LoadingTracker {
        &self.loading
    }

    pub async fn get(&self, path: &str, query: &[(&str, String)]) -> ClientResult<Value> {
        let query = query
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .collect();
        self.execute(ApiRequest::new(Method::GET, path).with_query(query))
            .await
    }

    pub async fn post<B: Serialize + Sync + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<Value> {
        let body = serde_json::to_value(body)?;
        self.execute(ApiRequest::new(Method::POST, path).with_body(body))
            .await
    }

    pub async fn post_empty(&self, path: &str) -> ClientResult<Value> {
        self.execute(ApiRequest::new(Method::POST, path)).await
    }

    pub async fn put<B: Serialize + Sync + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<Value> {
        let body = serde_json::to_value(body)?;
        self.execute(ApiRequest::new(Method::PUT, path).with_body(body))
            .await
    }

    pub async fn delete(&self, path: &str) -> ClientResult<Value> {
        self.execute(ApiRequest::new(Method::DELETE, path)).await
    }

    async fn execute(&self, request: ApiRequest) -> ClientResult<Value> {
        let request = request.with_token(self.session.token());
        let request_id = request.request_id;
        let _ticket = (!self.skip_loading).then(|| self.loading.begin(request_id));

        tracing::debug!(
            request_id = %request_id,
            method = %request.method,
            path = %request.path,
            "Sending request"
        );

        let result = match self.transport.send(&request).await {
            Ok(raw) => {
                tracing::debug!(request_id = %request_id, status = raw.status, "Response received");
                normalize(raw)
            }
            Err(e) => Err(e),
        };

        if let Err(err) = &result {
            match err {
                ClientError::Unauthorized { message } => {
                    tracing::warn!(
                        request_id = %request_id,
                        path = %request.path,
                        reason = %message,
                        "Unauthorized, clearing session"
                    );
                    self.session.clear();
                }
                ClientError::Rejected {
                    status, message, ..
                } => {
                    tracing::warn!(
                        request_id = %request_id,
                        path = %request.path,
                        status = *status,
                        message = %message,
                        "Request rejected"
                    );
                }
                other => {
                    tracing::error!(
                        request_id = %request_id,
                        path = %request.path,
                        error = %other,
                        "Request failed"
                    );
                }
            }
        }

        result
    }
}

/// Deserialize a normalized body
pub fn decode<T: DeserializeOwned>(value: Value) -> ClientResult<T> {
    serde_json::from_value(value).map_err(|e| ClientError::InvalidResponse(e.to_string()))
}
