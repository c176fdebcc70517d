//! Login, logout and registration against the backend

use shared::client::{LoginRequest, LoginResponse, RegisterRequest, RegisteredUser, UserInfo};
use shared::response::Envelope;

use super::{Session, SessionStore};
use crate::api::{ApiClient, decode};
use crate::error::{ClientError, ClientResult};

/// What the login form collects
#[derive(Debug, Clone)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
    /// Keep the user record in durable storage
    pub remember_me: bool,
}

impl LoginCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            remember_me: false,
        }
    }

    pub fn remember(mut self) -> Self {
        self.remember_me = true;
        self
    }
}

#[derive(Debug, Clone)]
pub struct AuthService {
    api: ApiClient,
    session: SessionStore,
}

impl AuthService {
    pub fn new(api: ApiClient) -> Self {
        let session = api.session().clone();
        Self { api, session }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// `POST api/login`; any failure leaves no auth data behind
    pub async fn login(&self, credentials: &LoginCredentials) -> ClientResult<Session> {
        match self.try_login(credentials).await {
            Ok(session) => {
                tracing::info!(
                    user_id = session.user_id,
                    username = %session.username,
                    remember_me = credentials.remember_me,
                    "Logged in"
                );
                Ok(session)
            }
            Err(e) => {
                tracing::warn!(username = %credentials.username, error = %e, "Login failed");
                self.session.clear();
                Err(e)
            }
        }
    }

    async fn try_login(&self, credentials: &LoginCredentials) -> ClientResult<Session> {
        let request = LoginRequest {
            username: credentials.username.clone(),
            password: credentials.password.clone(),
        };
        let response: LoginResponse = decode(self.api.post("api/login", &request).await?)?;

        if !response.is_success {
            return Err(ClientError::rejected(
                200,
                response.message.unwrap_or_else(|| "Login failed".into()),
            ));
        }
        let token = response
            .token
            .clone()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ClientError::InvalidResponse("Missing token in login response".into()))?;

        let session = Session::new(token, UserInfo::from(&response));
        self.session.establish(session.clone(), credentials.remember_me)?;
        Ok(session)
    }

    /// Notify the backend (only with a token) and always clear local state
    pub async fn logout(&self) {
        if self.session.token().is_some() {
            if let Err(e) = self.api.post_empty("api/login/logout").await {
                tracing::warn!(error = %e, "Logout call failed, clearing local session anyway");
            }
        }
        self.session.clear();
        tracing::info!("Logged out");
    }

    /// Restore a previous session from storage (app start)
    pub fn check_auth(&self) -> bool {
        self.session.restore()
    }

    /// `POST api/register`
    pub async fn register(&self, request: &RegisterRequest) -> ClientResult<RegisteredUser> {
        let body = self.api.post("api/register", request).await?;
        let response: Envelope<RegisteredUser> = decode(body)?;
        if response.is_success != Some(true) {
            return Err(ClientError::rejected(
                200,
                response.message.unwrap_or_else(|| "Registration failed".into()),
            ));
        }
        tracing::info!(username = %response.record.username, "Registered user");
        Ok(response.record)
    }
}
