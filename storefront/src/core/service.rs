//! # Service Traits
//!
//! Trait for dependency injection between endpoint functions and the transport.

use async_trait::async_trait;

use super::error::Result;
use crate::services::api::{ApiRequest, Envelope};

/// Dispatches one request and returns the normalized envelope.
///
/// [`ApiClient`](crate::services::api::ApiClient) is the production
/// implementation. Every endpoint function in [`crate::services::api`] takes
/// `&impl ApiService` (or `&dyn ApiService`), so tests can substitute a mock
/// that records requests.
#[async_trait]
pub trait ApiService: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<Envelope>;
}

#[async_trait]
impl<T: ApiService + ?Sized> ApiService for std::sync::Arc<T> {
    async fn send(&self, request: ApiRequest) -> Result<Envelope> {
        (**self).send(request).await
    }
}
