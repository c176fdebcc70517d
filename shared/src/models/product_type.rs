//! Product Type Model

use serde::{Deserialize, Serialize};

/// Product type entity (ring, necklace, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductType {
    pub id: i64,
    pub code: String,
    pub name_th: String,
    pub name_en: Option<String>,
    pub product_code: Option<String>,
    pub silver_code: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

/// Create product type payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductTypeCreate {
    pub code: String,
    pub name_th: String,
    pub name_en: Option<String>,
    pub product_code: Option<String>,
    pub silver_code: Option<String>,
}

/// Update product type payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductTypeUpdate {
    pub id: i64,
    pub code: String,
    pub name_th: String,
    pub name_en: Option<String>,
    pub product_code: Option<String>,
    pub silver_code: Option<String>,
    pub is_active: bool,
}
