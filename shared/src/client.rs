//! Auth-related types shared between the console client and its callers
//!
//! Login, registration and password DTOs plus the user/role shapes that
//! get persisted between runs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Role granted to a user, carrying the route names it may open
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleGrant {
    pub role_id: i64,
    pub role_name: String,
    #[serde(default)]
    pub router_allow: Vec<String>,
}

/// Login response body
///
/// `{ isSuccess, message, token, userId, username, email, expiresAt, roles }`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub is_success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user_id: i64,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub roles: Vec<RoleGrant>,
}

/// User record persisted alongside the token
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub user_id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub roles: Vec<RoleGrant>,
}

impl From<&LoginResponse> for UserInfo {
    fn from(resp: &LoginResponse) -> Self {
        Self {
            user_id: resp.user_id,
            username: resp.username.clone(),
            email: resp.email.clone(),
            expires_at: resp.expires_at,
            roles: resp.roles.clone(),
        }
    }
}

/// Self-service registration request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub tel: Option<String>,
    pub image_url: Option<String>,
}

/// Registration result
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredUser {
    #[serde(default)]
    pub user_id: i64,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Password change request (`PUT api/user/reset-password`)
///
/// Either `id` or `username` identifies the account; `id` 0 means "not set".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub id: i64,
    pub username: Option<String>,
    pub old_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_maps_to_user_info() {
        let resp: LoginResponse = serde_json::from_str(
            r#"{
                "isSuccess": true,
                "message": "ok",
                "token": "abc",
                "userId": 7,
                "username": "somchai",
                "email": "s@example.com",
                "expiresAt": "2026-11-01T00:00:00Z",
                "roles": [{"roleId": 1, "roleName": "Admin", "routerAllow": ["Dashboard"]}]
            }"#,
        )
        .unwrap();

        let user = UserInfo::from(&resp);
        assert_eq!(user.user_id, 7);
        assert_eq!(user.username, "somchai");
        assert_eq!(user.roles[0].router_allow, vec!["Dashboard".to_string()]);
        assert!(user.expires_at.is_some());
    }

    #[test]
    fn test_role_without_router_allow_defaults_empty() {
        let role: RoleGrant = serde_json::from_str(r#"{"roleId":2,"roleName":"Staff"}"#).unwrap();
        assert!(role.router_allow.is_empty());
    }
}
