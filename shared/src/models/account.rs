//! User Account Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::RoleGrant;

/// User account as listed in account management
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub id: i64,
    pub username: String,
    pub email: Option<String>,
    pub tel: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Newly registered, waiting for a role assignment
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub roles: Vec<RoleGrant>,
    pub create_date: Option<DateTime<Utc>>,
    pub create_by: Option<String>,
    pub last_login: Option<DateTime<Utc>>,
}

/// Identifies an account by id or username
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRef {
    pub id: Option<i64>,
    pub username: Option<String>,
}

impl UserRef {
    pub fn id(id: i64) -> Self {
        Self {
            id: Some(id),
            username: None,
        }
    }

    pub fn username(username: impl Into<String>) -> Self {
        Self {
            id: None,
            username: Some(username.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.username.as_deref().is_none_or(str::is_empty)
    }
}

/// Role assignment payload (`PUT api/user/update-role`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRoleUpdate {
    pub user_id: i64,
    pub role_id: i64,
    /// `None` leaves the `isNew` flag untouched
    pub update_is_new: Option<bool>,
}

/// Result of a role assignment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRoleAssignment {
    pub user_id: i64,
    pub role_id: i64,
    pub role_name: Option<String>,
    #[serde(default)]
    pub is_new: bool,
}
