//! Gem Model

use serde::{Deserialize, Serialize};

/// Gem type entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gem {
    pub id: i64,
    pub code: String,
    pub name_th: String,
    pub name_en: Option<String>,
    pub color: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

/// Create gem payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GemCreate {
    pub code: String,
    pub name_th: String,
    pub name_en: Option<String>,
    pub color: Option<String>,
}

/// Update gem payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GemUpdate {
    pub name_th: String,
    pub name_en: Option<String>,
    pub color: Option<String>,
}
