//! Route guard
//!
//! Decision order, first match wins:
//!
//! 1. guest-only route while signed in → dashboard
//! 2. auth-required route while signed out → login, remembering the target
//! 3. signed in and the route skips the permission check → allow
//! 4. signed in, named route → allow iff the name is in the permission set,
//!    otherwise dashboard
//! 5. public route → allow
//! 6. anything else → same as 2 when signed out, allow when signed in

use super::permissions::PermissionSet;
use super::routes::{self, DASHBOARD_PATH, LOGIN_PATH, RouteDescriptor};
use crate::session::SessionStore;

/// Outcome of a navigation attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allow,
    /// `redirect` is the full path the user was heading to
    RedirectToLogin { redirect: Option<String> },
    /// Replaces the current history entry
    RedirectToDashboard,
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }

    /// Where to go instead, `None` when allowed
    pub fn location(&self) -> Option<String> {
        match self {
            Decision::Allow => None,
            Decision::RedirectToLogin { redirect: None } => Some(LOGIN_PATH.to_string()),
            Decision::RedirectToLogin {
                redirect: Some(target),
            } => Some(format!("{}?redirect={}", LOGIN_PATH, encode_query_value(target))),
            Decision::RedirectToDashboard => Some(DASHBOARD_PATH.to_string()),
        }
    }
}

/// Snapshot of what the guard needs from the session
#[derive(Debug, Clone, Default)]
pub struct RouteGuard {
    authenticated: bool,
    permissions: PermissionSet,
}

impl RouteGuard {
    pub fn new(authenticated: bool, permissions: PermissionSet) -> Self {
        Self {
            authenticated,
            permissions,
        }
    }

    pub fn for_session(session: &SessionStore) -> Self {
        Self::new(session.is_authenticated(), session.permissions())
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn permissions(&self) -> &PermissionSet {
        &self.permissions
    }

    /// Decide for a known route; `full_path` is kept for the login redirect
    pub fn decide(&self, route: &RouteDescriptor, full_path: &str) -> Decision {
        let to_login = || Decision::RedirectToLogin {
            redirect: Some(full_path.to_string()),
        };

        let decision = if route.requires_guest {
            if self.authenticated {
                Decision::RedirectToDashboard
            } else {
                Decision::Allow
            }
        } else if route.requires_auth {
            if !self.authenticated {
                to_login()
            } else if route.skip_permission_check
                || route.name.is_empty()
                || self.permissions.allows(route.name)
            {
                Decision::Allow
            } else {
                Decision::RedirectToDashboard
            }
        } else if route.is_public || self.authenticated {
            Decision::Allow
        } else {
            to_login()
        };

        tracing::debug!(
            route = route.name,
            path = full_path,
            authenticated = self.authenticated,
            decision = ?decision,
            "Route guard"
        );
        decision
    }

    /// Resolve a raw path, including `/` and unknown paths
    pub fn navigate(&self, full_path: &str) -> Decision {
        match routes::route_by_path(full_path) {
            Some(route) => self.decide(route, full_path),
            None => self.fallback(),
        }
    }

    /// `/` and unknown paths: dashboard when signed in, login otherwise
    pub fn fallback(&self) -> Decision {
        if self.authenticated {
            Decision::RedirectToDashboard
        } else {
            Decision::RedirectToLogin { redirect: None }
        }
    }
}

/// Target of `/`
pub fn root_redirect(authenticated: bool) -> &'static str {
    if authenticated {
        DASHBOARD_PATH
    } else {
        LOGIN_PATH
    }
}

/// Percent-encode everything outside the unreserved set
fn encode_query_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
