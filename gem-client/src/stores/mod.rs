//! Resource stores
//!
//! One store per backend entity. Every call is a single round trip: set the
//! loading flag, clear the last error, call, record the failure message.
//! There is no caching, retry or request sequencing; two overlapping list
//! calls finish in whatever order the network delivers them.

mod account;
mod goods_receipt;
mod master;
mod role;
mod stock;

pub use account::AccountStore;
pub use goods_receipt::GoodsReceiptStore;
pub use master::{
    BranchStore, Branches, CustomerStore, Customers, GemShapeStore, GemShapes, GemStore, Gems,
    GoldSizeStore, GoldSizes, GoldStore, Golds, ProductTypeStore, ProductTypes, WorkerDriverStore,
    WorkerDrivers, WorkerGuideStore, WorkerGuides, WorkerSaleStore, WorkerSales,
};
pub use role::{RoleList, RoleStore};
pub use stock::StockStore;

use std::marker::PhantomData;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::request::DEFAULT_PAGE_SIZE;
use shared::{Envelope, ListRequest, ListResponse, Page, PagedListRequest, SortSpec};

use crate::api::{ApiClient, decode};
use crate::error::{ClientError, ClientResult};
pub(crate) use crate::http::success_flag;

/// Loading flag and last error of one store
#[derive(Debug, Default)]
pub struct StoreState {
    loading: AtomicBool,
    error: Mutex<Option<String>>,
}

impl StoreState {
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    pub fn error(&self) -> Option<String> {
        self.error.lock().clone()
    }

    pub fn clear_error(&self) {
        *self.error.lock() = None;
    }

    pub(crate) fn begin(&self) {
        self.loading.store(true, Ordering::Release);
        self.clear_error();
    }

    pub(crate) fn finish<T>(&self, result: ClientResult<T>) -> ClientResult<T> {
        self.loading.store(false, Ordering::Release);
        if let Err(e) = &result {
            *self.error.lock() = Some(e.user_message());
        }
        result
    }

    /// Run one round trip under this state
    pub(crate) async fn track<T, F>(&self, call: F) -> ClientResult<T>
    where
        F: Future<Output = ClientResult<T>>,
    {
        self.begin();
        let result = call.await;
        self.finish(result)
    }
}

/// Page request as the screens express it
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery<C> {
    /// Zero-based
    pub page_index: u32,
    pub page_size: u32,
    /// `None` uses the store's default sort
    pub sort: Option<SortSpec>,
    pub criteria: C,
}

impl<C: Default> Default for ListQuery<C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<C> ListQuery<C> {
    pub fn new(criteria: C) -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
            sort: None,
            criteria,
        }
    }

    pub fn page(mut self, page_index: u32, page_size: u32) -> Self {
        self.page_index = page_index;
        self.page_size = page_size;
        self
    }

    pub fn sorted(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Page size 0 falls back to the default
    pub fn effective_page_size(&self) -> u32 {
        if self.page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            self.page_size
        }
    }

    /// Wire payload; `skip` is the record offset of the page
    pub fn to_request(&self, default_sort: SortSpec) -> ListRequest<&C> {
        let take = self.effective_page_size();
        ListRequest {
            skip: u64::from(self.page_index) * u64::from(take),
            take,
            sort: self.sort.clone().unwrap_or(default_sort),
            criteria: &self.criteria,
        }
    }

    /// Wire payload for endpoints paging by page number
    pub fn to_paged_request(&self, default_sort: SortSpec) -> PagedListRequest<&C> {
        PagedListRequest {
            page_index: self.page_index,
            page_size: self.effective_page_size(),
            sort: self.sort.clone().unwrap_or(default_sort),
            criteria: &self.criteria,
        }
    }
}

/// How a list endpoint expects the requested page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paging {
    /// `skip` / `take`
    Offset,
    /// `pageIndex` / `pageSize`
    PageNumber,
}

/// Result of a create/update call
#[derive(Debug, Clone, PartialEq)]
pub struct Saved<T> {
    pub message: String,
    /// Echoed record, when the response carried a complete one
    pub record: Option<T>,
}

/// A CRUD entity served under `api/<SEGMENT>`
pub trait Resource {
    /// URL segment, e.g. `branch`
    const SEGMENT: &'static str;
    /// Used in fallback messages, e.g. "Failed to get branch"
    const LABEL: &'static str;
    const PAGING: Paging = Paging::Offset;

    type Record: DeserializeOwned + Send;
    type Create: Serialize + Sync;
    type Update: Serialize + Sync;
    type Criteria: Serialize + Sync;

    fn default_sort() -> SortSpec {
        SortSpec::default()
    }
}

/// list/get/create/update over one [`Resource`]
#[derive(Debug)]
pub struct CrudStore<R: Resource> {
    api: ApiClient,
    state: StoreState,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> CrudStore<R> {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            state: StoreState::default(),
            _resource: PhantomData,
        }
    }

    pub fn state(&self) -> &StoreState {
        &self.state
    }

    /// `POST api/<segment>/list`
    pub async fn list(&self, query: &ListQuery<R::Criteria>) -> ClientResult<Page<R::Record>> {
        self.state
            .track(async {
                let path = format!("api/{}/list", R::SEGMENT);
                let body = match R::PAGING {
                    Paging::Offset => {
                        self.api
                            .post(&path, &query.to_request(R::default_sort()))
                            .await?
                    }
                    Paging::PageNumber => {
                        self.api
                            .post(&path, &query.to_paged_request(R::default_sort()))
                            .await?
                    }
                };
                let response: ListResponse<R::Record> = decode(body)?;
                Ok(Page::from_response(
                    response,
                    query.page_index,
                    query.effective_page_size(),
                ))
            })
            .await
    }

    /// `GET api/<segment>/{id}`
    pub async fn get(&self, id: i64) -> ClientResult<R::Record> {
        self.state
            .track(async {
                let body = self
                    .api
                    .get(&format!("api/{}/{}", R::SEGMENT, id), &[])
                    .await?;
                require_success(success_flag(&body), body_message(&body), || {
                    format!("Failed to get {}", R::LABEL)
                })?;
                let envelope: Envelope<R::Record> = decode(body)?;
                Ok(envelope.record)
            })
            .await
    }

    /// `POST api/<segment>`
    pub async fn create(&self, input: &R::Create) -> ClientResult<Saved<R::Record>> {
        self.state
            .track(async {
                let body = self.api.post(&format!("api/{}", R::SEGMENT), input).await?;
                saved::<R::Record>(body, R::LABEL, Mutation::Create)
            })
            .await
    }

    /// `PUT api/<segment>/{id}`
    pub async fn update(&self, id: i64, input: &R::Update) -> ClientResult<Saved<R::Record>> {
        self.state
            .track(async {
                let body = self
                    .api
                    .put(&format!("api/{}/{}", R::SEGMENT, id), input)
                    .await?;
                saved::<R::Record>(body, R::LABEL, Mutation::Update)
            })
            .await
    }
}

/// Detail and mutation endpoints must say `isSuccess: true` explicitly
pub(crate) fn require_success(
    flag: Option<bool>,
    message: Option<&str>,
    fallback: impl FnOnce() -> String,
) -> ClientResult<()> {
    if flag == Some(true) {
        return Ok(());
    }
    Err(ClientError::rejected(200, message_or(message, fallback)))
}

/// Server message unless blank
pub(crate) fn message_or(message: Option<&str>, fallback: impl FnOnce() -> String) -> String {
    message
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .unwrap_or_else(fallback)
}

pub(crate) fn body_message(body: &Value) -> Option<&str> {
    body.get("message").and_then(Value::as_str)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mutation {
    Create,
    Update,
}

impl Mutation {
    fn verb(self) -> &'static str {
        match self {
            Mutation::Create => "create",
            Mutation::Update => "update",
        }
    }

    fn past(self) -> &'static str {
        match self {
            Mutation::Create => "created",
            Mutation::Update => "updated",
        }
    }
}

/// Interpret a `{isSuccess, message, ...record}` mutation response
pub(crate) fn saved<T: DeserializeOwned>(
    body: Value,
    label: &str,
    mutation: Mutation,
) -> ClientResult<Saved<T>> {
    let message = body_message(&body);
    require_success(success_flag(&body), message, || {
        format!("Failed to {} {}", mutation.verb(), label)
    })?;

    let message = message_or(message, || {
        format!("{} {} successfully", capitalize(label), mutation.past())
    });
    Ok(Saved {
        message,
        record: serde_json::from_value(body).ok(),
    })
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shared::SearchCriteria;

    #[test]
    fn test_list_query_skip_is_record_offset() {
        let query = ListQuery::new(SearchCriteria::text("ring")).page(3, 25);
        let value = serde_json::to_value(query.to_request(SortSpec::newest_first())).unwrap();
        assert_eq!(value["skip"], json!(75));
        assert_eq!(value["take"], json!(25));
        assert_eq!(value["sortBy"], json!("CreateDate"));
        assert_eq!(value["criteria"]["searchText"], json!("ring"));
    }

    #[test]
    fn test_list_query_zero_page_size_defaults() {
        let query = ListQuery::new(SearchCriteria::default()).page(2, 0);
        let request = query.to_request(SortSpec::default());
        assert_eq!(request.take, 10);
        assert_eq!(request.skip, 20);
    }

    #[test]
    fn test_paged_request_keeps_page_number() {
        let query = ListQuery::new(SearchCriteria::text("nok")).page(2, 0);
        let value = serde_json::to_value(query.to_paged_request(SortSpec::newest_first())).unwrap();
        assert_eq!(value["pageIndex"], json!(2));
        assert_eq!(value["pageSize"], json!(10));
        assert_eq!(value["isDescending"], json!(true));
        assert!(value.get("skip").is_none());
    }

    #[test]
    fn test_explicit_sort_overrides_default() {
        let query = ListQuery::new(SearchCriteria::default())
            .sorted(SortSpec::fields(vec![shared::SortField::asc("code")]));
        let value = serde_json::to_value(query.to_request(SortSpec::newest_first())).unwrap();
        assert!(value.get("sortBy").is_none());
        assert_eq!(value["sort"], json!([{"field": "code", "dir": "asc"}]));
    }

    #[test]
    fn test_saved_messages() {
        #[derive(Debug, serde::Deserialize, PartialEq)]
        struct Thing {
            id: i64,
        }

        let ok: Saved<Thing> =
            saved(json!({"isSuccess": true, "id": 4}), "gem", Mutation::Create).unwrap();
        assert_eq!(ok.message, "Gem created successfully");
        assert_eq!(ok.record, Some(Thing { id: 4 }));

        let partial: Saved<Thing> =
            saved(json!({"isSuccess": true, "message": "Saved"}), "gem", Mutation::Update).unwrap();
        assert_eq!(partial.message, "Saved");
        assert!(partial.record.is_none());

        let err = saved::<Thing>(json!({"id": 4}), "gem", Mutation::Update).unwrap_err();
        assert_eq!(err.user_message(), "Failed to update gem");
    }

    #[test]
    fn test_store_state_records_failure() {
        let state = StoreState::default();
        state.begin();
        assert!(state.is_loading());
        let _ = state.finish::<()>(Err(ClientError::rejected(404, "Not found")));
        assert!(!state.is_loading());
        assert_eq!(state.error().as_deref(), Some("Not found"));
        state.clear_error();
        assert!(state.error().is_none());
    }
}
