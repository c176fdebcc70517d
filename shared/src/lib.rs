//! Shared types for the jewelry POS console
//!
//! Wire-level request/response structures and entity records exchanged
//! with the jewelry REST backend. These types carry no behaviour beyond
//! serde mapping and small constructors; `gem-client` owns the logic.

pub mod client;
pub mod models;
pub mod request;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use request::{
    ListRequest, PagedListRequest, SearchCriteria, SortDirection, SortField, SortSpec,
};
pub use response::{DataEnvelope, Envelope, ListResponse, Page};
