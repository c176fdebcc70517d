//! Route permissions derived from a user's roles

use std::collections::BTreeSet;

use shared::client::RoleGrant;

/// Union of `routerAllow` across roles, plus the role names themselves
///
/// Pure membership: no hierarchy, inheritance or wildcards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionSet {
    routes: BTreeSet<String>,
    roles: BTreeSet<String>,
}

impl PermissionSet {
    pub fn from_roles(roles: &[RoleGrant]) -> Self {
        Self {
            routes: roles
                .iter()
                .flat_map(|r| r.router_allow.iter().cloned())
                .collect(),
            roles: roles.iter().map(|r| r.role_name.clone()).collect(),
        }
    }

    pub fn allows(&self, route_name: &str) -> bool {
        self.routes.contains(route_name)
    }

    /// An empty requirement list places no restriction
    pub fn allows_any<S: AsRef<str>>(&self, route_names: &[S]) -> bool {
        route_names.is_empty() || route_names.iter().any(|n| self.allows(n.as_ref()))
    }

    /// An empty requirement list places no restriction
    pub fn allows_all<S: AsRef<str>>(&self, route_names: &[S]) -> bool {
        route_names.iter().all(|n| self.allows(n.as_ref()))
    }

    pub fn has_role(&self, role_name: &str) -> bool {
        self.roles.contains(role_name)
    }

    pub fn has_any_role<S: AsRef<str>>(&self, role_names: &[S]) -> bool {
        role_names.is_empty() || role_names.iter().any(|n| self.has_role(n.as_ref()))
    }

    pub fn route_names(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
