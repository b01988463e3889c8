//! In-memory response cache living for the whole process.

use std::collections::HashMap;

use super::service::ResponseCache;
use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::debug;

/// Unbounded, non-expiring map from request URL to upstream JSON.
///
/// Constructed once at startup and shared through [`std::sync::Arc`].
/// Concurrent writers to the same key race and the last write wins.
pub struct MemoryCache {
    entries: RwLock<HashMap<String, Value>>,
    default_ttl: u64,
}

impl MemoryCache {
    /// Creates an empty cache.
    ///
    /// `default_ttl_seconds` is reported in logs when [`ResponseCache::set`]
    /// is called without a TTL. It does not cause eviction.
    pub fn new(default_ttl_seconds: u64) -> Self {
        debug!(default_ttl_seconds, "Creating in-memory response cache");
        Self {
            entries: RwLock::new(HashMap::new()),
            default_ttl: default_ttl_seconds,
        }
    }
}

#[async_trait]
impl ResponseCache for MemoryCache {
    async fn has(&self, key: &str) -> bool {
        self.entries.read().await.contains_key(key)
    }

    async fn get(&self, key: &str) -> Option<Value> {
        let entries = self.entries.read().await;
        match entries.get(key) {
            Some(value) => {
                debug!("Cache HIT: {}", key);
                Some(value.clone())
            }
            None => {
                debug!("Cache MISS: {}", key);
                None
            }
        }
    }

    async fn set(&self, key: &str, value: Value, ttl_seconds: Option<u64>) {
        // TODO: enforce ttl_seconds once an eviction policy is agreed on.
        let ttl = ttl_seconds.unwrap_or(self.default_ttl);
        self.entries.write().await.insert(key.to_string(), value);
        debug!("Cache SET: {} (TTL: {}s, not enforced)", key, ttl);
    }

    async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}
