//! Gem Client - client core of the jewelry POS admin console
//!
//! Session handling, route guarding, REST resource stores and the cost
//! recalculation behind the stock screens. Rendering is left to the caller;
//! everything here is reachable from an explicitly built [`AppContext`].

pub mod api;
pub mod config;
pub mod context;
pub mod error;
pub mod http;
pub mod loading;
pub mod navigation;
pub mod pricing;
pub mod product_edit;
pub mod session;
pub mod stores;

pub use api::ApiClient;
pub use config::{ClientConfig, StorageKeys};
pub use context::AppContext;
pub use error::{ClientError, ClientResult, ErrorKind, Failure};
pub use http::{HttpTransport, NetworkHttpClient};
pub use loading::LoadingTracker;
pub use navigation::{Decision, PermissionSet, RouteDescriptor, RouteGuard};
pub use session::{AuthService, LoginCredentials, Session, SessionStore};
pub use stores::{ListQuery, Saved};

// Re-export shared types for convenience
pub use shared::client::{LoginResponse, RoleGrant, UserInfo};
pub use shared::{Page, SearchCriteria, SortSpec};
