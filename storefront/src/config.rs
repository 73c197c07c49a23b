//! Client configuration from environment variables

use std::env;
use std::time::Duration;

use crate::core::error::{ClientError, Result};

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_LOADING_MESSAGE: &str = "Requesting...";

#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Backend origin; request paths are appended to it
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Overlay text for calls that don't set their own
    pub default_loading_message: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_loading_message: DEFAULT_LOADING_MESSAGE.to_string(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables
    ///
    /// - `STOREFRONT_API_URL` (default `http://127.0.0.1:8080`)
    /// - `STOREFRONT_TIMEOUT_SECS` (default `10`)
    /// - `STOREFRONT_LOADING_MESSAGE` (default `Requesting...`)
    pub fn from_env() -> Result<Self> {
        let base_url = env::var("STOREFRONT_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let timeout_secs = match env::var("STOREFRONT_TIMEOUT_SECS") {
            Ok(raw) => raw.parse::<u64>().map_err(|_| {
                ClientError::Config(format!(
                    "STOREFRONT_TIMEOUT_SECS must be a whole number of seconds, got {raw:?}"
                ))
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        let default_loading_message = env::var("STOREFRONT_LOADING_MESSAGE")
            .unwrap_or_else(|_| DEFAULT_LOADING_MESSAGE.to_string());

        let config = Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
            default_loading_message,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ClientError::Config(format!(
                "base URL must start with http:// or https://, got {:?}",
                self.base_url
            )));
        }

        if self.timeout.is_zero() {
            return Err(ClientError::Config("timeout must be greater than zero".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ClientConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.default_loading_message, "Requesting...");
    }

    #[test]
    fn test_validate_rejects_bad_scheme() {
        let config = ClientConfig::default().with_base_url("ftp://shop.local");
        assert!(matches!(config.validate(), Err(ClientError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = ClientConfig {
            timeout: Duration::ZERO,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
