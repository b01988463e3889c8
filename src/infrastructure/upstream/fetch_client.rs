//! Cache-fronted upstream fetch client.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use super::transport::HttpTransport;
use crate::error::{AppError, GENERIC_MESSAGE};
use crate::infrastructure::cache::ResponseCache;

/// Fetches upstream JSON, consulting the response cache first.
///
/// On a miss the body is stored under the exact URL string before being
/// returned. Every transport failure (network, 4xx, 5xx) collapses into a
/// single [`AppError::Upstream`]; there are no retries.
pub struct FetchClient {
    transport: Arc<dyn HttpTransport>,
    cache: Arc<dyn ResponseCache>,
    cache_ttl_seconds: u64,
}

impl FetchClient {
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        cache: Arc<dyn ResponseCache>,
        cache_ttl_seconds: u64,
    ) -> Self {
        Self {
            transport,
            cache,
            cache_ttl_seconds,
        }
    }

    /// Returns the JSON payload for `url`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] if the request fails or the response
    /// status is not a success.
    pub async fn fetch(&self, url: &str) -> Result<Value, AppError> {
        if let Some(cached) = self.cache.get(url).await {
            return Ok(cached);
        }

        let body = self.transport.get_json(url).await.map_err(|e| {
            warn!(url, error = %e, "Upstream fetch failed");
            AppError::upstream(GENERIC_MESSAGE)
        })?;

        debug!(url, "Fetched from upstream");
        self.cache
            .set(url, body.clone(), Some(self.cache_ttl_seconds))
            .await;

        Ok(body)
    }

    /// Fetches `url` and decodes it into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] on fetch failure or when the payload
    /// does not match `T`.
    pub async fn fetch_as<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        let body = self.fetch(url).await?;

        serde_json::from_value(body).map_err(|e| {
            warn!(url, error = %e, "Unexpected upstream payload");
            AppError::upstream(GENERIC_MESSAGE)
        })
    }
}
