//! Customer Model

use serde::{Deserialize, Serialize};

/// Customer entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(alias = "id")]
    pub customer_id: i64,
    pub customer_number: String,
    pub customer_name: String,
    pub custtype: Option<i32>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub country: Option<String>,
    pub postcode: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub remark: Option<String>,
    pub payid: Option<i32>,
    pub payterm: Option<i32>,
    pub discount: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

/// Create customer payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInput {
    pub customer_number: String,
    pub customer_name: String,
    pub custtype: Option<i32>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub country: Option<String>,
    pub postcode: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub remark: Option<String>,
    pub payid: Option<i32>,
    pub payterm: Option<i32>,
    pub discount: Option<String>,
}

/// Update customer payload
///
/// Number and name are fixed once created; `isActive: null` leaves the
/// status as it is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerUpdate {
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub country: Option<String>,
    pub postcode: Option<String>,
    pub is_active: Option<bool>,
    pub discount: Option<String>,
}
