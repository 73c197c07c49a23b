//! # Shared Storefront DTO Library
//!
//! This library defines the contract between the storefront client and the
//! shop backend. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::user`]**: accounts, profile updates, password changes
//!   - **[`dto::catalog`]**: categories, products and the admin forms that create them
//!   - **[`dto::cart`]**: cart lines and cart summary
//!   - **[`dto::order`]**: orders, order items, order/payment status
//!   - **[`dto::wallet`]**: wallet balances
//!   - **[`dto::address`]**: delivery addresses
//! - **[`utils`]**: lenient number parsing for form values
//!
//! ## Wire Format
//!
//! The backend speaks camelCase JSON, so every struct carries
//! `#[serde(rename_all = "camelCase")]`. Optional fields are omitted from
//! requests when `None`.
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::catalog::ProductForm;
//!
//! let form = ProductForm {
//!     name: "Green tea".to_string(),
//!     price: "9.99".to_string(),
//!     stock: "3".to_string(),
//!     category_id: "2".to_string(),
//!     status: "available".to_string(),
//!     ..Default::default()
//! };
//!
//! let payload = form.to_payload();
//! assert_eq!(payload.status, 1);
//! assert_eq!(payload.price, Some(9.99));
//! ```

pub mod dto;
pub mod utils;

// Wildcard re-exports: shared is a DTO library and everything here is public API
pub use dto::*;
pub use utils::*;
