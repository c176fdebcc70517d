//! Stock Inventory Model
//!
//! Stock items are finished jewelry pieces identified by a stock number.
//! Each carries a bill of materials (gold, gems, labor) whose costs add up
//! to the product cost.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Material line kind
///
/// Types this client does not price keep their wire name so they are
/// re-sent unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MaterialKind {
    Gold,
    Gem,
    Labor,
    Other(String),
}

impl MaterialKind {
    pub fn as_str(&self) -> &str {
        match self {
            MaterialKind::Gold => "gold",
            MaterialKind::Gem => "gem",
            MaterialKind::Labor => "labor",
            MaterialKind::Other(raw) => raw,
        }
    }
}

impl From<&str> for MaterialKind {
    fn from(raw: &str) -> Self {
        match raw {
            "gold" => MaterialKind::Gold,
            "gem" => MaterialKind::Gem,
            "labor" => MaterialKind::Labor,
            other => MaterialKind::Other(other.to_string()),
        }
    }
}

impl Serialize for MaterialKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MaterialKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(MaterialKind::from(raw.as_str()))
    }
}

/// One material line of a stock item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    #[serde(rename = "type")]
    pub kind: MaterialKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_name_th: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_name_en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape_name_th: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape_name_en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waste_percent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qty: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qty_unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default)]
    pub cost: Option<f64>,
    /// Fields this client does not model, echoed back untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Material {
    /// Bare material line of the given kind, mostly for tests and forms
    pub fn new(kind: MaterialKind) -> Self {
        Self {
            kind,
            item_code: None,
            item_name_th: None,
            item_name_en: None,
            shape_code: None,
            shape_name_th: None,
            shape_name_en: None,
            size: None,
            origin: None,
            description: None,
            weight: None,
            label_weight: None,
            weight_unit: None,
            waste_percent: None,
            qty: None,
            qty_unit: None,
            price: None,
            cost: None,
            extra: Map::new(),
        }
    }

    pub fn is_gold(&self) -> bool {
        self.kind == MaterialKind::Gold
    }

    /// Recorded cost, missing treated as zero
    pub fn recorded_cost(&self) -> f64 {
        self.cost.unwrap_or_default()
    }
}

/// Cost summary block of a stock item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used_cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percent: Option<f64>,
}

/// Full stock item as returned by `api/stock/inventory/get`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockDetail {
    pub stock_number: String,
    pub product_name_th: Option<String>,
    pub product_name_en: Option<String>,
    pub product_type_name_th: Option<String>,
    pub product_type_name_en: Option<String>,
    pub product_number: Option<String>,
    pub po_number: Option<String>,
    pub location: Option<String>,
    pub size: Option<String>,
    pub qty_unit: Option<String>,
    pub product_cost_unit: Option<String>,
    pub remark: Option<String>,
    pub branch_id: Option<i64>,
    pub branch_name_th: Option<String>,
    pub branch_name_en: Option<String>,
    pub status: Option<String>,
    pub product_cost: Option<f64>,
    #[serde(default)]
    pub cost_summary: CostSummary,
    #[serde(default)]
    pub materials: Vec<Material>,
    /// Fields this client does not model, echoed back untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Row of the stock inventory list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockItem {
    pub stock_number: String,
    pub product_code: Option<String>,
    pub mold: Option<String>,
    pub product_name_th: Option<String>,
    pub product_name_en: Option<String>,
    pub product_type_code: Option<String>,
    pub branch_id: Option<i64>,
    pub receipt_date: Option<DateTime<Utc>>,
    pub price: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Two-level material filter (type code + size/shape code)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialFilter {
    pub type_code1: Option<Vec<String>>,
    pub type_code2: Option<Vec<String>>,
}

/// Stock list search criteria
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockCriteria {
    pub receipt_date_min: Option<DateTime<Utc>>,
    pub receipt_date_max: Option<DateTime<Utc>>,
    /// Origin numbers
    pub product_codes: Option<Vec<String>>,
    pub stock_numbers: Option<Vec<String>>,
    pub product_type_codes: Option<Vec<String>>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub branch_ids: Option<Vec<i64>>,
    pub gold_filter: Option<MaterialFilter>,
    pub gem_filter: Option<MaterialFilter>,
}

/// Lookup by stock number (`api/stock/inventory/get`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockLookup {
    pub stock_number: String,
}

/// One stock in an edit request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockEditItem {
    pub stock_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name_th: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name_en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub po_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qty_unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_cost_unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_cost: Option<f64>,
    /// Full replacement material list; absent leaves materials untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub materials: Option<Vec<Material>>,
}

impl StockEditItem {
    pub fn new(stock_number: impl Into<String>) -> Self {
        Self {
            stock_number: stock_number.into(),
            product_name_th: None,
            product_name_en: None,
            location: None,
            size: None,
            product_number: None,
            po_number: None,
            qty_unit: None,
            product_cost_unit: None,
            remark: None,
            branch_id: None,
            product_cost: None,
            materials: None,
        }
    }
}

/// Edit request body (`api/stock/inventory/edit`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StockEditRequest {
    pub stocks: Vec<StockEditItem>,
}

/// Per-branch node of the inventory summary
/// (branch → product type → gold type → karat)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchSummary {
    pub branch_id: Option<i64>,
    pub branch_name_th: Option<String>,
    pub branch_name_en: Option<String>,
    #[serde(flatten)]
    pub breakdown: Map<String, Value>,
}

/// Inventory summary response body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventorySummary {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub branches: Vec<BranchSummary>,
}
