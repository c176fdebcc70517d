//! Role Model

use serde::{Deserialize, Serialize};

/// Role entity with its navigation allow-list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub role_id: i64,
    pub role_name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub level: i32,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub is_system_role: bool,
    /// Route names this role may navigate to
    #[serde(default)]
    pub router_allow: Vec<String>,
}

/// Update role payload; only provided fields are sent
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub router_allow: Option<Vec<String>>,
}

/// Wire payload for `PUT api/role/{id}`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleUpdateRequest<'a> {
    pub role_id: i64,
    #[serde(flatten)]
    pub update: &'a RoleUpdate,
}
