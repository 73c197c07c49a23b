//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged with the storefront backend.
//!
//! ## Module Organization
//!
//! - [`user`] - accounts, profile and password forms
//! - [`catalog`] - categories, products, admin forms and their coerced payloads
//! - [`cart`] - cart lines and totals
//! - [`order`] - orders and the order/payment status enums
//! - [`wallet`] - wallet balances and amount requests
//! - [`address`] - delivery addresses
//!
//! ## Serialization Format
//!
//! - **Field naming**: camelCase on the wire (`#[serde(rename_all = "camelCase")]`)
//! - **Optional fields**: omitted when `None` on requests, defaulted when absent on responses
//! - **Status enums**: serialize to the backend's lowercase codes
//!
//! ## Example JSON Communication
//!
//! Every response is wrapped in an envelope carrying an integer `code`:
//!
//! ```text
//! GET /category/list
//!
//! {
//!   "code": 200,
//!   "message": "success",
//!   "data": [
//!     { "id": 1, "name": "Drinks", "status": 1, "sortOrder": 0 }
//!   ]
//! }
//! ```

pub mod address;
pub mod cart;
pub mod catalog;
pub mod order;
pub mod user;
pub mod wallet;

pub use address::*;
pub use cart::*;
pub use catalog::*;
pub use order::*;
pub use user::*;
pub use wallet::*;
