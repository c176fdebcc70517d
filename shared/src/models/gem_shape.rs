//! Gem Shape Model

use serde::{Deserialize, Serialize};

/// Gem cut/shape entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GemShape {
    pub id: i64,
    pub code: String,
    pub name_th: String,
    pub name_en: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

/// Create gem shape payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GemShapeCreate {
    pub code: String,
    pub name_th: String,
    pub name_en: Option<String>,
}

/// Update gem shape payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GemShapeUpdate {
    pub id: i64,
    pub name_th: String,
    pub name_en: Option<String>,
}
