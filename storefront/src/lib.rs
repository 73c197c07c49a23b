//! # Storefront Client - Library Root
//!
//! Client-side plumbing for the storefront: a typed HTTP client for the
//! backend, a page-wide loading overlay, and a guard against double
//! submission of buttons and forms.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              storefront (this crate)                   │
//! ├────────────────────────────────────────────────────────┤
//! │  ui::SubmitGuard      - one in-flight action per element│
//! │  ui::LoadingIndicator - ref-counted blocking overlay    │
//! │  services::api        - endpoint functions + ApiClient  │
//! │  Reqwest              - HTTP transport                  │
//! │  Tokio                - Async runtime                   │
//! └────────────────────────────────────────────────────────┘
//!          │
//!          │ HTTP (query / form / JSON)
//!          ▼
//! ┌─────────────────────────┐
//! │  Storefront backend     │
//! │  {code, message, data}  │
//! └─────────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **config**: `ClientConfig` loaded from `STOREFRONT_*` environment variables
//! - **core**: `ClientError`, `Result`, and the `ApiService` trait
//! - **debug**: `tracing` subscriber setup
//! - **services**: backend endpoints grouped by resource
//! - **ui**: overlay, element seams, submit guard
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use storefront::config::ClientConfig;
//! use storefront::services::api::{cart, ApiClient};
//! use storefront::ui::{GuardTarget, HeadlessControl, LoadingIndicator, SubmitGuard};
//!
//! # async fn demo() -> storefront::Result<()> {
//! let loading = Arc::new(LoadingIndicator::headless());
//! let api = ApiClient::new(&ClientConfig::from_env()?, loading)?;
//! let guard = SubmitGuard::new();
//!
//! let button = HeadlessControl::button("Add to cart");
//! let added = guard
//!     .run(&GuardTarget::Button(button), "Adding...", || cart::add_to_cart(&api, 3, 9, None))
//!     .await;
//! # let _ = added;
//! # Ok(())
//! # }
//! ```
//!
//! ## Testing
//!
//! ```bash
//! cargo test -p storefront
//! ```

pub mod config;
pub mod core;
pub mod debug;
pub mod services;
pub mod ui;

pub use config::ClientConfig;
pub use core::{ApiService, ClientError, Result};
pub use services::api::{ApiClient, ApiRequest, Envelope};
