//! Data models
//!
//! Entity records as returned by the backend and the payloads used to
//! create or update them. Field names follow the backend's camelCase.

pub mod account;
pub mod branch;
pub mod customer;
pub mod gem;
pub mod gem_shape;
pub mod gold;
pub mod gold_size;
pub mod goods_receipt;
pub mod product_type;
pub mod role;
pub mod stock;
pub mod worker;

pub use account::*;
pub use branch::*;
pub use customer::*;
pub use gem::*;
pub use gem_shape::*;
pub use gold::*;
pub use gold_size::*;
pub use goods_receipt::*;
pub use product_type::*;
pub use role::*;
pub use stock::*;
pub use worker::*;
