//! Role-based navigation: permission sets, the route table and the guard

mod guard;
mod permissions;
pub mod routes;

pub use guard::{Decision, RouteGuard, root_redirect};
pub use permissions::PermissionSet;
pub use routes::{RouteDescriptor, RouteGroup, page_title};
