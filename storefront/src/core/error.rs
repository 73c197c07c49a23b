//! # Client Error Types
//!
//! Consolidated error handling for the storefront client.
//!
//! ## Error Categories
//!
//! - **Transport**: the request never produced a response body (connection refused,
//!   DNS failure, timeout). Surfaced as-is, never retried.
//! - **Decode**: a body arrived but is not a JSON object.
//! - **Application**: the envelope's `code` is not `200`. Only produced on request,
//!   through [`Envelope::into_result`](crate::services::api::Envelope::into_result);
//!   plain calls return the envelope with `success == false` instead.
//! - **InvalidRequest**: the caller handed over parameters that cannot be encoded.
//! - **Config**: environment or builder configuration is unusable.
//!
//! A rejected duplicate submit is not an error at all: guarded actions return `None`.
//!
//! ## Usage Pattern
//!
//! ```rust,no_run
//! use storefront::core::error::{ClientError, Result};
//!
//! fn require_user(user_id: Option<i64>) -> Result<i64> {
//!     user_id.ok_or_else(|| ClientError::InvalidRequest("user id is required".to_string()))
//! }
//! ```

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Network-level failure while sending or reading the response.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body is not a JSON object.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Backend answered with a non-200 envelope code.
    ///
    /// `code` is `None` when the backend omitted it entirely.
    #[error("Request rejected (code {}): {}", fmt_code(.code), .message.as_deref().unwrap_or("no message"))]
    Application {
        code: Option<i64>,
        message: Option<String>,
    },

    /// Parameters could not be encoded for the chosen body encoding.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

fn fmt_code(code: &Option<i64>) -> String {
    code.map(|c| c.to_string()).unwrap_or_else(|| "missing".to_string())
}

/// Convenience type alias for `Result<T, ClientError>`.
pub type Result<T> = std::result::Result<T, ClientError>;

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}
