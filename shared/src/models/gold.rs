//! Gold Model

use serde::{Deserialize, Serialize};

/// Gold type entity (e.g. 96.5%, 18K)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gold {
    pub id: i64,
    pub code: String,
    pub name_th: String,
    pub name_en: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

/// Create gold payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoldCreate {
    pub code: String,
    pub name_th: String,
    pub name_en: Option<String>,
}

/// Update gold payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoldUpdate {
    pub id: i64,
    pub name_th: String,
    pub name_en: Option<String>,
}
