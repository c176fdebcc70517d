//! Session store
//!
//! Holds the signed-in user and bearer token, and mirrors them into the
//! durable / session-scoped storages:
//!
//! | key          | location                          | written when        |
//! |--------------|-----------------------------------|---------------------|
//! | `token-gem`  | durable                           | every login         |
//! | `user`       | durable if remembered, else scoped| every login         |
//! | `rememberMe` | durable                           | remembered logins   |
//!
//! The in-memory session is replaced wholesale on login and dropped on
//! logout; readers never see a half-written session.

mod auth;
mod storage;

pub use auth::{AuthService, LoginCredentials};
pub use storage::{FileStorage, MemoryStorage, SessionStorage};

use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use shared::client::{RoleGrant, UserInfo};

use crate::config::StorageKeys;
use crate::error::ClientResult;
use crate::navigation::PermissionSet;

/// Signed-in user
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user_id: i64,
    pub username: String,
    pub email: Option<String>,
    pub roles: Vec<RoleGrant>,
    pub token: String,
    pub expires_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn new(token: impl Into<String>, user: UserInfo) -> Self {
        Self {
            user_id: user.user_id,
            username: user.username,
            email: user.email,
            roles: user.roles,
            token: token.into(),
            expires_at: user.expires_at,
        }
    }

    /// Sessions without an expiry never expire client-side
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|at| now >= at)
    }

    pub fn permissions(&self) -> PermissionSet {
        PermissionSet::from_roles(&self.roles)
    }

    /// User record as persisted (no token)
    pub fn user_info(&self) -> UserInfo {
        UserInfo {
            user_id: self.user_id,
            username: self.username.clone(),
            email: self.email.clone(),
            expires_at: self.expires_at,
            roles: self.roles.clone(),
        }
    }
}

struct SessionInner {
    durable: Arc<dyn SessionStorage>,
    scoped: Arc<dyn SessionStorage>,
    keys: StorageKeys,
    current: RwLock<Option<Session>>,
}

/// Shared handle to the current session
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<SessionInner>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("keys", &self.inner.keys)
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

impl SessionStore {
    pub fn new(
        durable: Arc<dyn SessionStorage>,
        scoped: Arc<dyn SessionStorage>,
        keys: StorageKeys,
    ) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                durable,
                scoped,
                keys,
                current: RwLock::new(None),
            }),
        }
    }

    /// Both locations in memory, default keys
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryStorage::new()),
            Arc::new(MemoryStorage::new()),
            StorageKeys::default(),
        )
    }

    pub fn keys(&self) -> &StorageKeys {
        &self.inner.keys
    }

    pub fn current(&self) -> Option<Session> {
        self.inner.current.read().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.inner.current.read().as_ref().map(|s| s.token.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.current.read().is_some()
    }

    /// Union of `routerAllow` over the session's roles; empty when signed out
    pub fn permissions(&self) -> PermissionSet {
        self.inner
            .current
            .read()
            .as_ref()
            .map(Session::permissions)
            .unwrap_or_default()
    }

    /// Persist a fresh login and make it current
    pub fn establish(&self, session: Session, remember_me: bool) -> ClientResult<()> {
        let keys = &self.inner.keys;
        let user_json = serde_json::to_string(&session.user_info())?;

        self.inner.durable.set(&keys.token, &session.token)?;
        if remember_me {
            self.inner.durable.set(&keys.user, &user_json)?;
            self.inner.durable.set(&keys.remember_me, "true")?;
        } else {
            // a stale remembered user must not shadow this login on restore
            self.inner.durable.remove(&keys.user)?;
            self.inner.durable.remove(&keys.remember_me)?;
            self.inner.scoped.set(&keys.user, &user_json)?;
        }

        tracing::debug!(
            user_id = session.user_id,
            username = %session.username,
            remember_me,
            "Session established"
        );
        *self.inner.current.write() = Some(session);
        Ok(())
    }

    /// Rebuild the session from storage
    ///
    /// Returns whether a session was restored. A missing token, a missing
    /// user record or an unreadable one wipes all auth data.
    pub fn restore(&self) -> bool {
        let keys = &self.inner.keys;

        let token = match self.inner.durable.get(&keys.token) {
            Ok(Some(token)) if !token.is_empty() => token,
            Ok(_) => {
                self.clear();
                return false;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read stored token");
                self.clear();
                return false;
            }
        };

        let remembered = matches!(
            self.inner.durable.get(&keys.remember_me),
            Ok(Some(flag)) if flag == "true"
        );
        let location = if remembered {
            &self.inner.durable
        } else {
            &self.inner.scoped
        };

        let user_json = match location.get(&keys.user) {
            Ok(Some(json)) => json,
            Ok(None) => {
                self.clear();
                return false;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read stored user");
                self.clear();
                return false;
            }
        };

        match serde_json::from_str::<UserInfo>(&user_json) {
            Ok(user) => {
                tracing::debug!(username = %user.username, remembered, "Session restored");
                *self.inner.current.write() = Some(Session::new(token, user));
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "Discarding unreadable stored user");
                self.clear();
                false
            }
        }
    }

    /// Drop the session and every persisted auth key in both locations
    pub fn clear(&self) {
        *self.inner.current.write() = None;

        let keys = &self.inner.keys;
        for key in [&keys.token, &keys.user, &keys.remember_me] {
            if let Err(e) = self.inner.durable.remove(key) {
                tracing::warn!(key = %key, error = %e, "Failed to remove durable auth key");
            }
        }
        if let Err(e) = self.inner.scoped.remove(&keys.user) {
            tracing::warn!(error = %e, "Failed to remove session-scoped user");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn user(roles: Vec<RoleGrant>) -> UserInfo {
        UserInfo {
            user_id: 7,
            username: "somchai".into(),
            email: Some("s@example.com".into()),
            expires_at: None,
            roles,
        }
    }

    fn stores() -> (Arc<MemoryStorage>, Arc<MemoryStorage>, SessionStore) {
        let durable = Arc::new(MemoryStorage::new());
        let scoped = Arc::new(MemoryStorage::new());
        let store = SessionStore::new(durable.clone(), scoped.clone(), StorageKeys::default());
        (durable, scoped, store)
    }

    #[test]
    fn test_remembered_login_is_durable() {
        let (durable, scoped, store) = stores();
        store
            .establish(Session::new("tok", user(vec![])), true)
            .unwrap();

        assert_eq!(durable.get("token-gem").unwrap().as_deref(), Some("tok"));
        assert_eq!(durable.get("rememberMe").unwrap().as_deref(), Some("true"));
        assert!(durable.get("user").unwrap().is_some());
        assert!(scoped.is_empty());
    }

    #[test]
    fn test_unremembered_login_keeps_user_scoped() {
        let (durable, scoped, store) = stores();
        store
            .establish(Session::new("tok", user(vec![])), false)
            .unwrap();

        assert!(durable.get("user").unwrap().is_none());
        assert!(durable.get("rememberMe").unwrap().is_none());
        assert!(scoped.get("user").unwrap().is_some());
        assert_eq!(store.token().as_deref(), Some("tok"));
    }

    #[test]
    fn test_restore_reads_from_flagged_location() {
        let (durable, scoped, store) = stores();
        let role = RoleGrant {
            role_id: 1,
            role_name: "Admin".into(),
            router_allow: vec!["StockList".into()],
        };
        store
            .establish(Session::new("tok", user(vec![role])), false)
            .unwrap();

        let fresh = SessionStore::new(durable, scoped, StorageKeys::default());
        assert!(fresh.restore());
        assert!(fresh.permissions().allows("StockList"));
        assert_eq!(fresh.current().unwrap().username, "somchai");
    }

    #[test]
    fn test_restore_without_token_wipes() {
        let (_durable, scoped, store) = stores();
        scoped.set("user", r#"{"userId":1,"username":"a"}"#).unwrap();
        assert!(!store.restore());
        assert!(scoped.is_empty());
    }

    #[test]
    fn test_restore_with_invalid_json_wipes_silently() {
        let (durable, _scoped, store) = stores();
        durable.set("token-gem", "tok").unwrap();
        durable.set("rememberMe", "true").unwrap();
        durable.set("user", "{not json").unwrap();

        assert!(!store.restore());
        assert!(!store.is_authenticated());
        assert!(durable.is_empty());
    }

    #[test]
    fn test_clear_removes_everything() {
        let (durable, scoped, store) = stores();
        store
            .establish(Session::new("tok", user(vec![])), true)
            .unwrap();
        scoped.set("user", "{}").unwrap();

        store.clear();
        assert!(durable.is_empty());
        assert!(scoped.is_empty());
        assert!(store.token().is_none());
        assert!(store.permissions().is_empty());
    }

    #[test]
    fn test_session_expiry() {
        let now = Utc::now();
        let mut session = Session::new("tok", user(vec![]));
        assert!(!session.is_expired(now));

        session.expires_at = Some(now - Duration::minutes(1));
        assert!(session.is_expired(now));

        session.expires_at = Some(now + Duration::hours(1));
        assert!(!session.is_expired(now));
    }
}
