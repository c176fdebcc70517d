//! Gold Size Model

use serde::{Deserialize, Serialize};

/// Gold size / karat entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoldSize {
    pub id: i64,
    pub code: String,
    pub name_th: String,
    pub name_en: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    /// Whether the size can be used on goods receipt
    #[serde(default)]
    pub is_receipt: bool,
}

/// Create gold size payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoldSizeCreate {
    pub code: String,
    pub name_th: String,
    pub name_en: Option<String>,
}

/// Update gold size payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoldSizeUpdate {
    pub id: i64,
    pub name_th: String,
    pub name_en: Option<String>,
}
