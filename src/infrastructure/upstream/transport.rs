//! Outbound HTTP transport for the upstream API.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Upstream returned status {0}")]
    Status(u16),
}

/// Performs a GET and decodes the JSON body.
///
/// Kept behind a trait so the fetch client can be exercised without a
/// network.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// # Errors
    ///
    /// Returns [`TransportError::Status`] for any non-2xx response and
    /// [`TransportError::Network`] for connection or decoding failures.
    async fn get_json(&self, url: &str) -> Result<Value, TransportError>;
}

/// `reqwest`-backed transport.
/// Clone is cheap - `reqwest::Client` shares its connection pool.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Builds a transport with connection pooling.
    ///
    /// No request timeout is set: a hung upstream call hangs the request.
    pub fn new() -> Result<Self, TransportError> {
        Ok(Self {
            client: Client::builder().build()?,
        })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get_json(&self, url: &str) -> Result<Value, TransportError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        Ok(response.json::<Value>().await?)
    }
}
