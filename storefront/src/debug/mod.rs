//! # Logging Infrastructure
//!
//! Structured logging for the storefront client, built on `tracing`.
//!
//! ## Usage
//!
//! ```rust,no_run
//! // Initialize at startup
//! storefront::debug::init();
//!
//! // Log with structured fields
//! tracing::info!(path = "/category/list", duration_ms = 12, "API call completed");
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (default `storefront=info,warn`)
//! - `STOREFRONT_LOG_DIR`: also write a daily-rotated `storefront.log` here
//! - `STOREFRONT_LOG_JSON`: JSON lines on stderr (1=on, 0=off)

pub mod config;
pub mod logger;

pub use config::LogConfig;
pub use logger::{init, init_with};
