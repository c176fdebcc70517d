//! Branch Model

use serde::{Deserialize, Serialize};

/// Branch entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    pub branch_id: i64,
    pub name_th: String,
    pub name_en: Option<String>,
    pub address: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

/// Create / update branch payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchInput {
    pub name_th: String,
    pub name_en: Option<String>,
    pub address: Option<String>,
}
