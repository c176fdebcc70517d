//! Stock inventory
//!
//! List, lookup, batch edit and the branch summary. Lookups and edits go
//! by stock number, not numeric id.

use serde_json::json;
use shared::models::{
    BranchSummary, InventorySummary, MaterialFilter, StockCriteria, StockDetail, StockEditItem,
    StockEditRequest, StockItem, StockLookup,
};
use shared::{DataEnvelope, ListResponse, Page, SortSpec};

use super::{ListQuery, StoreState, body_message, message_or, require_success, success_flag};
use crate::api::{ApiClient, decode};
use crate::error::{ClientError, ClientResult};

#[derive(Debug)]
pub struct StockStore {
    api: ApiClient,
    state: StoreState,
}

impl StockStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            state: StoreState::default(),
        }
    }

    pub fn state(&self) -> &StoreState {
        &self.state
    }

    /// `POST api/stock/inventory/list`
    ///
    /// Empty filter lists go out as `null` so the server skips them.
    pub async fn list(&self, query: &ListQuery<StockCriteria>) -> ClientResult<Page<StockItem>> {
        self.state
            .track(async {
                let criteria = normalize_criteria(&query.criteria);
                let mut request = query.to_request(SortSpec::default());
                request.criteria = &criteria;

                tracing::debug!(
                    skip = request.skip,
                    take = request.take,
                    "Listing stock inventory"
                );
                let body = self.api.post("api/stock/inventory/list", &request).await?;
                let response: ListResponse<StockItem> = decode(body)?;
                Ok(Page::from_response(response, query.page_index, request.take))
            })
            .await
    }

    /// `POST api/stock/inventory/get`
    ///
    /// An unknown stock number comes back as a rejection carrying the
    /// server's message (usually "Stock not found").
    pub async fn get(&self, stock_number: &str) -> ClientResult<StockDetail> {
        self.state
            .track(async {
                let lookup = StockLookup {
                    stock_number: stock_number.to_string(),
                };
                let body = self.api.post("api/stock/inventory/get", &lookup).await?;
                let envelope: DataEnvelope<StockDetail> = decode(body)?;
                match envelope.data {
                    Some(detail) if envelope.success => Ok(detail),
                    _ => Err(ClientError::rejected(
                        200,
                        message_or(envelope.message.as_deref(), || {
                            format!("Stock {stock_number} not found")
                        }),
                    )),
                }
            })
            .await
    }

    /// `POST api/stock/inventory/edit`, several stocks in one call
    pub async fn edit(&self, stocks: Vec<StockEditItem>) -> ClientResult<String> {
        self.state
            .track(async {
                let count = stocks.len();
                let request = StockEditRequest { stocks };
                let body = self.api.post("api/stock/inventory/edit", &request).await?;
                let message = body_message(&body);
                require_success(success_flag(&body), message, || {
                    "Failed to update stock".to_string()
                })?;
                tracing::info!(count, "Stock inventory updated");
                Ok(message_or(message, || "Stock updated successfully".to_string()))
            })
            .await
    }

    /// `POST api/stock/inventory/summary`
    ///
    /// Branch → product type → gold type → karat breakdown.
    pub async fn summary(&self) -> ClientResult<Vec<BranchSummary>> {
        self.state
            .track(async {
                let body = self
                    .api
                    .post("api/stock/inventory/summary", &json!({}))
                    .await?;
                let summary: InventorySummary = decode(body)?;
                if !summary.success {
                    return Err(ClientError::rejected(
                        200,
                        message_or(summary.message.as_deref(), || {
                            "Failed to get inventory summary".to_string()
                        }),
                    ));
                }
                Ok(summary.branches)
            })
            .await
    }
}

fn non_empty<T: Clone>(values: &Option<Vec<T>>) -> Option<Vec<T>> {
    values.as_ref().filter(|v| !v.is_empty()).cloned()
}

fn normalize_filter(filter: &Option<MaterialFilter>) -> Option<MaterialFilter> {
    let filter = filter.as_ref()?;
    let normalized = MaterialFilter {
        type_code1: non_empty(&filter.type_code1),
        type_code2: non_empty(&filter.type_code2),
    };
    (normalized.type_code1.is_some() || normalized.type_code2.is_some()).then_some(normalized)
}

/// Empty lists, empty filters and zero prices become `null`
pub(crate) fn normalize_criteria(criteria: &StockCriteria) -> StockCriteria {
    StockCriteria {
        receipt_date_min: criteria.receipt_date_min,
        receipt_date_max: criteria.receipt_date_max,
        product_codes: non_empty(&criteria.product_codes),
        stock_numbers: non_empty(&criteria.stock_numbers),
        product_type_codes: non_empty(&criteria.product_type_codes),
        price_min: criteria.price_min.filter(|p| *p != 0.0),
        price_max: criteria.price_max.filter(|p| *p != 0.0),
        branch_ids: non_empty(&criteria.branch_ids),
        gold_filter: normalize_filter(&criteria.gold_filter),
        gem_filter: normalize_filter(&criteria.gem_filter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_lists_become_null() {
        let criteria = StockCriteria {
            product_codes: Some(vec![]),
            stock_numbers: Some(vec!["ST001".into()]),
            branch_ids: Some(vec![]),
            price_min: Some(0.0),
            price_max: Some(50_000.0),
            gold_filter: Some(MaterialFilter {
                type_code1: Some(vec![]),
                type_code2: Some(vec![]),
            }),
            gem_filter: Some(MaterialFilter {
                type_code1: Some(vec!["RUBY".into()]),
                type_code2: Some(vec![]),
            }),
            ..Default::default()
        };

        let normalized = normalize_criteria(&criteria);
        assert!(normalized.product_codes.is_none());
        assert_eq!(normalized.stock_numbers, Some(vec!["ST001".to_string()]));
        assert!(normalized.branch_ids.is_none());
        assert!(normalized.price_min.is_none());
        assert_eq!(normalized.price_max, Some(50_000.0));
        assert!(normalized.gold_filter.is_none());
        assert_eq!(
            normalized.gem_filter,
            Some(MaterialFilter {
                type_code1: Some(vec!["RUBY".into()]),
                type_code2: None,
            })
        );
    }

    #[test]
    fn test_list_payload_uses_field_sort() {
        let criteria = normalize_criteria(&StockCriteria::default());
        let query = ListQuery::new(StockCriteria::default()).page(1, 20);
        let mut request = query.to_request(SortSpec::default());
        request.criteria = &criteria;
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["skip"], json!(20));
        assert_eq!(value["sort"], json!([]));
        assert_eq!(value["criteria"]["goldFilter"], json!(null));
        assert_eq!(value["criteria"]["stockNumbers"], json!(null));
    }
}
