//! Cache trait for upstream responses.

use async_trait::async_trait;
use serde_json::Value;

/// Cache of upstream JSON payloads keyed by the exact request URL.
///
/// Lookups are exact-match only. Reads hand back an owned copy of the stored
/// payload, so callers may mutate what they get without touching the cache.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::MemoryCache`] - Process-lifetime in-memory map
#[async_trait]
pub trait ResponseCache: Send + Sync {
    /// Returns whether a payload is stored under `key`.
    async fn has(&self, key: &str) -> bool;

    /// Returns a copy of the payload stored under `key`.
    async fn get(&self, key: &str) -> Option<Value>;

    /// Stores `value` under `key`, replacing any previous payload.
    ///
    /// `ttl_seconds` is accepted for interface compatibility; entries never
    /// expire.
    async fn set(&self, key: &str, value: Value, ttl_seconds: Option<u64>);

    /// Number of stored entries.
    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
