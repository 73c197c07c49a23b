//! # API Client
//!
//! Main HTTP client for backend API communication.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use reqwest::Client;

use super::envelope::Envelope;
use super::request::{encode_pairs, ApiRequest, BodyEncoding};
use crate::config::ClientConfig;
use crate::core::error::{ClientError, Result};
use crate::core::service::ApiService;
use crate::ui::overlay::LoadingIndicator;

/// HTTP client for the storefront backend.
///
/// Each call is independent: no retries, no caching, no ordering between
/// concurrent calls. While a call is in flight it holds one reference on the
/// shared [`LoadingIndicator`] unless the request is marked silent.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
    default_loading_message: String,
    loading: Arc<LoadingIndicator>,
}

impl ApiClient {
    /// Create a client from configuration and the page's loading indicator.
    pub fn new(config: &ClientConfig, loading: Arc<LoadingIndicator>) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            default_loading_message: config.default_loading_message.clone(),
            loading,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn loading(&self) -> &Arc<LoadingIndicator> {
        &self.loading
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn build(&self, request: &ApiRequest) -> Result<reqwest::RequestBuilder> {
        let mut builder = self
            .client
            .request(request.method().clone(), self.url(&request.path));

        let query = request.query_pairs()?;
        if !query.is_empty() {
            builder = builder.query(&query);
        }

        builder = match (request.config.encoding, &request.params) {
            (BodyEncoding::Form, Some(params)) => builder.form(&encode_pairs(params)?),
            (BodyEncoding::Json, Some(body)) => builder.json(body),
            _ => builder,
        };

        // After the body, so caller headers replace the encoding's content type
        Ok(builder.headers(request.config.headers.clone()))
    }

    async fn dispatch(&self, request: &ApiRequest) -> Result<Envelope> {
        let builder = self.build(request)?;
        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        Envelope::from_slice(&body).inspect_err(|e| {
            tracing::warn!(status = status.as_u16(), error = %e, "Response body is not an envelope");
        })
    }
}

#[async_trait]
impl ApiService for ApiClient {
    #[tracing::instrument(skip_all, fields(method = %request.method(), path = %request.path))]
    async fn send(&self, request: ApiRequest) -> Result<Envelope> {
        let start = Instant::now();

        let _overlay = request.config.show_loading.then(|| {
            let message = request
                .config
                .loading_message
                .as_deref()
                .unwrap_or(&self.default_loading_message);
            self.loading.begin(message)
        });

        let result = self.dispatch(&request).await;
        let duration_ms = start.elapsed().as_millis();

        match &result {
            Ok(envelope) if envelope.success => {
                tracing::debug!(code = ?envelope.code, duration_ms, "API call completed");
            }
            Ok(envelope) => {
                tracing::info!(
                    code = ?envelope.code,
                    reason = %envelope.message_text().unwrap_or_default(),
                    duration_ms,
                    "API call returned failure code"
                );
            }
            Err(e) => {
                tracing::error!(error = %e, duration_ms, "API request failed");
            }
        }

        result
    }
}
