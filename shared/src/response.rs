//! API Response types
//!
//! The backend answers in three shapes:
//!
//! ```json
//! { "data": [ ... ], "total": 42 }                       // list endpoints
//! { "data": [ ... ], "totalRecords": 42 }                // page-numbered lists
//! { "isSuccess": true, "message": "...", "id": 1, ... }  // detail / mutation
//! { "success": true, "message": "...", "data": { ... } } // role and stock endpoints
//! ```

use serde::{Deserialize, Serialize};

/// Raw list response returned by `*/list` endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default, alias = "totalRecords")]
    pub total: u64,
}

/// Flattened detail/mutation response
///
/// The record fields sit next to the success flag, so `record` is flattened.
/// Some endpoints spell the flag `success` instead of `isSuccess`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    #[serde(default, alias = "success", skip_serializing_if = "Option::is_none")]
    pub is_success: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub record: T,
}

/// Response carrying its payload under `data`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataEnvelope<T> {
    #[serde(default, alias = "isSuccess")]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_records: Option<u64>,
}

/// Normalized page handed back to callers of list operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_records: u64,
    pub page_index: u32,
    pub page_size: u32,
}

impl<T> Page<T> {
    /// Build a page from a raw list response
    pub fn from_response(response: ListResponse<T>, page_index: u32, page_size: u32) -> Self {
        Self {
            items: response.data,
            total_records: response.total,
            page_index,
            page_size,
        }
    }

    /// Total number of pages for the current page size
    pub fn total_pages(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        self.total_records.div_ceil(u64::from(self.page_size))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
