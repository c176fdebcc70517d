//! Role management
//!
//! Role endpoints answer `{success, message, data}`; the route allow-list
//! of a role is edited here and read back at login through the user's
//! role grants.

use shared::DataEnvelope;
use shared::models::{Role, RoleUpdate, RoleUpdateRequest};

use super::{StoreState, body_message, message_or, require_success, success_flag};
use crate::api::{ApiClient, decode};
use crate::error::{ClientError, ClientResult};

#[derive(Debug)]
pub struct RoleStore {
    api: ApiClient,
    state: StoreState,
}

/// Roles plus the server's record count
#[derive(Debug, Clone, PartialEq)]
pub struct RoleList {
    pub roles: Vec<Role>,
    pub total_records: u64,
}

impl RoleStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            state: StoreState::default(),
        }
    }

    pub fn state(&self) -> &StoreState {
        &self.state
    }

    /// `GET api/role?isActiveOnly=&searchText=`
    pub async fn list(
        &self,
        is_active_only: Option<bool>,
        search_text: Option<&str>,
    ) -> ClientResult<RoleList> {
        self.state
            .track(async {
                let mut query = Vec::new();
                if let Some(active) = is_active_only {
                    query.push(("isActiveOnly", active.to_string()));
                }
                if let Some(text) = search_text.filter(|t| !t.is_empty()) {
                    query.push(("searchText", text.to_string()));
                }

                let body = self.api.get("api/role", &query).await?;
                require_success(success_flag(&body), body_message(&body), || {
                    "Failed to get roles".to_string()
                })?;
                let envelope: DataEnvelope<Vec<Role>> = decode(body)?;
                Ok(RoleList {
                    roles: envelope.data.unwrap_or_default(),
                    total_records: envelope.total_records.unwrap_or_default(),
                })
            })
            .await
    }

    /// `GET api/role/{id}`
    pub async fn get(&self, role_id: i64) -> ClientResult<Role> {
        self.state
            .track(async {
                let body = self.api.get(&format!("api/role/{role_id}"), &[]).await?;
                require_success(success_flag(&body), body_message(&body), || {
                    "Failed to get role".to_string()
                })?;
                let envelope: DataEnvelope<Role> = decode(body)?;
                envelope
                    .data
                    .ok_or_else(|| ClientError::InvalidResponse("role data missing".to_string()))
            })
            .await
    }

    /// `PUT api/role/{id}`; only the fields set on `update` are sent
    pub async fn update(&self, role_id: i64, update: &RoleUpdate) -> ClientResult<String> {
        self.state
            .track(async {
                let request = RoleUpdateRequest { role_id, update };
                let body = self
                    .api
                    .put(&format!("api/role/{role_id}"), &request)
                    .await?;
                let message = body_message(&body);
                require_success(success_flag(&body), message, || {
                    "Failed to update role".to_string()
                })?;
                Ok(message_or(message, || "Role updated successfully".to_string()))
            })
            .await
    }
}
