//! Worker staff models: tour guides, sales staff, drivers

use serde::{Deserialize, Serialize};

/// Tour guide bringing customers to the shop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerGuide {
    pub id: i64,
    pub code: String,
    pub name_th: String,
    pub name_en: Option<String>,
    #[serde(rename = "eMail")]
    pub email: Option<String>,
    pub tel: Option<String>,
    pub gender: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

/// Create / update guide payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerGuideInput {
    pub name_th: String,
    pub name_en: Option<String>,
    #[serde(rename = "eMail")]
    pub email: Option<String>,
    pub tel: Option<String>,
    pub gender: Option<String>,
}

/// Sales staff member attached to a branch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerSale {
    pub id: i64,
    pub code: String,
    pub name_th: String,
    pub name_en: Option<String>,
    #[serde(rename = "eMail")]
    pub email: Option<String>,
    pub tel: Option<String>,
    pub gender: Option<String>,
    /// Branch id
    pub branch: Option<i64>,
    #[serde(default)]
    pub is_active: bool,
}

/// Create / update sales staff payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerSaleInput {
    pub name_th: String,
    pub name_en: Option<String>,
    #[serde(rename = "eMail")]
    pub email: Option<String>,
    pub tel: Option<String>,
    pub gender: Option<String>,
    pub branch: Option<i64>,
}

/// Driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerDriver {
    pub id: i64,
    pub code: String,
    pub name_th: String,
    pub name_en: Option<String>,
    pub tel: Option<String>,
    pub gender: Option<String>,
    pub vehicle_registration: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

/// Create / update driver payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerDriverInput {
    pub name_th: String,
    pub name_en: Option<String>,
    pub tel: Option<String>,
    pub gender: Option<String>,
    pub vehicle_registration: Option<String>,
}
