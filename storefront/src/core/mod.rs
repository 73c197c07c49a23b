//! # Core Abstractions
//!
//! Error types and the service trait that endpoint functions are written against.
//!
//! - **[`error`]**: `ClientError` and the `Result<T>` alias
//! - **[`service`]**: `ApiService`, the seam between endpoint functions and the transport
//!
//! ## Dependency Injection
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use storefront::core::service::ApiService;
//! use storefront::services::api::ApiClient;
//!
//! // In production: the reqwest-backed client
//! // let api: Arc<dyn ApiService> = Arc::new(ApiClient::new(&config, loading)?);
//!
//! // In tests: a recording mock that returns canned envelopes
//! ```

pub mod error;
pub mod service;

pub use error::{ClientError, Result};
pub use service::ApiService;
