//! Account management and password reset
//!
//! Users are addressed by id or username; every mutation answers with
//! `{isSuccess, message, ...}`.

use shared::client::ResetPasswordRequest;
use shared::models::{UserAccount, UserRef, UserRoleAssignment, UserRoleUpdate};
use shared::{Envelope, ListResponse, Page, SearchCriteria, SortSpec};

use super::{
    ListQuery, Saved, StoreState, body_message, message_or, require_success, success_flag,
};
use crate::api::{ApiClient, decode};
use crate::error::{ClientError, ClientResult};

#[derive(Debug)]
pub struct AccountStore {
    api: ApiClient,
    state: StoreState,
}

impl AccountStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            state: StoreState::default(),
        }
    }

    pub fn state(&self) -> &StoreState {
        &self.state
    }

    /// `POST api/user/list`, newest accounts first by default
    pub async fn list(&self, query: &ListQuery<SearchCriteria>) -> ClientResult<Page<UserAccount>> {
        self.state
            .track(async {
                let request = query.to_request(SortSpec::newest_first());
                let body = self.api.post("api/user/list", &request).await?;
                let response: ListResponse<UserAccount> = decode(body)?;
                Ok(Page::from_response(response, query.page_index, request.take))
            })
            .await
    }

    /// `GET api/user?id=&username=`
    pub async fn get(&self, user: &UserRef) -> ClientResult<UserAccount> {
        self.state
            .track(async {
                let query = user_query(user)?;
                let body = self.api.get("api/user", &query).await?;
                require_success(success_flag(&body), body_message(&body), || {
                    "Failed to get user".to_string()
                })?;
                let envelope: Envelope<UserAccount> = decode(body)?;
                Ok(envelope.record)
            })
            .await
    }

    /// `PUT api/user/activate`
    pub async fn activate(&self, user: &UserRef) -> ClientResult<String> {
        self.set_active(user, true).await
    }

    /// `PUT api/user/deactivate`
    pub async fn deactivate(&self, user: &UserRef) -> ClientResult<String> {
        self.set_active(user, false).await
    }

    async fn set_active(&self, user: &UserRef, active: bool) -> ClientResult<String> {
        let (path, done, verb) = if active {
            ("api/user/activate", "activated", "activate")
        } else {
            ("api/user/deactivate", "deactivated", "deactivate")
        };
        self.state
            .track(async {
                ensure_identified(user)?;
                let body = self.api.put(path, user).await?;
                let message = body_message(&body);
                require_success(success_flag(&body), message, || {
                    format!("Failed to {verb} user")
                })?;
                Ok(message_or(message, || format!("User {done} successfully")))
            })
            .await
    }

    /// `PUT api/user/update-role`
    pub async fn update_role(
        &self,
        update: &UserRoleUpdate,
    ) -> ClientResult<Saved<UserRoleAssignment>> {
        self.state
            .track(async {
                let body = self.api.put("api/user/update-role", update).await?;
                let message = body_message(&body);
                require_success(success_flag(&body), message, || {
                    "Failed to update user role".to_string()
                })?;
                let message = message_or(message, || "User role updated successfully".to_string());
                Ok(Saved {
                    message,
                    record: serde_json::from_value(body).ok(),
                })
            })
            .await
    }

    /// `PUT api/user/reset-password`
    ///
    /// A mismatched confirmation is refused locally. Server-side field
    /// errors are kept on the returned [`ClientError::Rejected`].
    pub async fn reset_password(&self, request: &ResetPasswordRequest) -> ClientResult<String> {
        self.state
            .track(async {
                if request.new_password != request.confirm_password {
                    return Err(ClientError::Validation(
                        "New password and confirmation do not match".to_string(),
                    ));
                }
                let body = self.api.put("api/user/reset-password", request).await?;
                let message = body_message(&body);
                require_success(success_flag(&body), message, || {
                    "Failed to reset password".to_string()
                })?;
                Ok(message_or(message, || "Password reset successfully".to_string()))
            })
            .await
    }
}

fn ensure_identified(user: &UserRef) -> ClientResult<()> {
    if user.is_empty() {
        return Err(ClientError::Validation(
            "Either user id or username is required".to_string(),
        ));
    }
    Ok(())
}

fn user_query(user: &UserRef) -> ClientResult<Vec<(&'static str, String)>> {
    ensure_identified(user)?;
    let mut query = Vec::with_capacity(2);
    if let Some(id) = user.id {
        query.push(("id", id.to_string()));
    }
    if let Some(username) = user.username.as_deref().filter(|u| !u.is_empty()) {
        query.push(("username", username.to_string()));
    }
    Ok(query)
}
