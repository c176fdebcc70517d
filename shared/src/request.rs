//! List request payloads
//!
//! Most `*/list` endpoints take `{skip, take, <sort>, criteria}`; a few page
//! by `{pageIndex, pageSize, <sort>, criteria}` instead. The sort part comes
//! in two flavours depending on the endpoint: a field list
//! (`sort: [{field, dir}]`) or a single column (`sortBy` + `isDescending`).

use serde::{Deserialize, Serialize};

/// Default page size used when the caller does not pick one
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Default sort column for endpoints using `sortBy`
pub const DEFAULT_SORT_COLUMN: &str = "CreateDate";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// One entry of a multi-field sort
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortField {
    pub field: String,
    pub dir: SortDirection,
}

impl SortField {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            dir: SortDirection::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            dir: SortDirection::Desc,
        }
    }
}

/// Sort specification, flattened into the list payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SortSpec {
    /// `sortBy` + `isDescending`
    Column {
        #[serde(rename = "sortBy")]
        sort_by: String,
        #[serde(rename = "isDescending")]
        is_descending: bool,
    },
    /// `sort: [{field, dir}]`
    Fields { sort: Vec<SortField> },
}

impl SortSpec {
    /// Newest records first, the backend's usual default
    pub fn newest_first() -> Self {
        Self::Column {
            sort_by: DEFAULT_SORT_COLUMN.to_string(),
            is_descending: true,
        }
    }

    pub fn fields(fields: Vec<SortField>) -> Self {
        Self::Fields { sort: fields }
    }
}

impl Default for SortSpec {
    fn default() -> Self {
        Self::Fields { sort: Vec::new() }
    }
}

/// Free-text criteria shared by the simple master-data lists
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    pub search_text: Option<String>,
}

impl SearchCriteria {
    /// Blank search text is sent as `null`
    pub fn text(text: impl Into<String>) -> Self {
        let text = text.into();
        let trimmed = text.trim();
        Self {
            search_text: (!trimmed.is_empty()).then(|| trimmed.to_string()),
        }
    }
}

/// Wire payload of a list call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListRequest<C> {
    pub skip: u64,
    pub take: u32,
    #[serde(flatten)]
    pub sort: SortSpec,
    pub criteria: C,
}

/// Wire payload of a list call on endpoints paging by page number
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedListRequest<C> {
    pub page_index: u32,
    pub page_size: u32,
    #[serde(flatten)]
    pub sort: SortSpec,
    pub criteria: C,
}
