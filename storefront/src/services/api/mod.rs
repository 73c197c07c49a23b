//! # Backend API Client Module
//!
//! HTTP client for the storefront backend. Every endpoint returns the
//! normalized [`Envelope`]; `envelope.success` (or [`Envelope::into_result`])
//! tells the caller whether the backend accepted the call.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs       - Module exports and documentation
//! ├── client.rs    - ApiClient: reqwest transport, overlay, normalization
//! ├── request.rs   - ApiRequest / RequestConfig / BodyEncoding
//! ├── envelope.rs  - Envelope: the {code, ...} response wrapper
//! ├── user.rs      - Login, registration, profile
//! ├── category.rs  - Category listing and admin CRUD
//! ├── product.rs   - Product listing, search and admin CRUD
//! ├── cart.rs      - Cart lines, totals, guest-cart migration
//! ├── order.rs     - Checkout, history, admin/merchant workflow
//! ├── wallet.rs    - Balance, recharge, consume, freeze
//! └── address.rs   - Delivery address book
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use storefront::config::ClientConfig;
//! use storefront::services::api::{product, ApiClient};
//! use storefront::ui::LoadingIndicator;
//!
//! # async fn demo() -> storefront::core::Result<()> {
//! let loading = Arc::new(LoadingIndicator::headless());
//! let api = ApiClient::new(&ClientConfig::from_env()?, loading)?;
//!
//! let products = product::get_products_by_category(&api, Some(2)).await?;
//! if products.success {
//!     let items: Vec<shared::Product> = products.data_as()?;
//!     println!("{} products", items.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod address;
pub mod cart;
pub mod category;
pub mod client;
pub mod envelope;
pub mod order;
pub mod product;
pub mod request;
pub mod user;
pub mod wallet;


pub use client::ApiClient;
pub use envelope::Envelope;
pub use request::{ApiRequest, BodyEncoding, RequestConfig};

/// Percent-encode a caller-supplied string for use as one path segment.
pub(crate) fn encode_segment(segment: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(segment)
}
