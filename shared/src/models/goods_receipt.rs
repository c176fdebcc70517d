//! Goods Receipt Model

use serde::{Deserialize, Serialize};

use super::stock::{CostSummary, Material};

/// Manual goods receipt (`api/goodsreceipt/manualreceipt`)
///
/// Mold and origin number are manufacturing batch identifiers, opaque here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualReceipt {
    pub mold: String,
    pub origin_number: String,
    pub product_name_th: String,
    pub product_name_en: Option<String>,
    pub qty: f64,
    pub qty_unit: String,
    pub price: f64,
    pub price_unit: String,
    pub branch_id: i64,
    pub branch_name_th: Option<String>,
    pub branch_name_en: Option<String>,
    pub product_type_code: String,
    pub product_type_name_th: Option<String>,
    pub product_type_name_en: Option<String>,
    #[serde(default)]
    pub gold: Vec<Material>,
    #[serde(default)]
    pub gem: Vec<Material>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_summary: Option<CostSummary>,
}
