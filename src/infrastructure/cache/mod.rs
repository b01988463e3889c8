//! Caching layer for upstream responses.
//!
//! Provides a [`ResponseCache`] trait and the [`MemoryCache`] implementation
//! used by [`crate::infrastructure::upstream::FetchClient`].

mod memory_cache;
mod service;

pub use memory_cache::MemoryCache;
pub use service::ResponseCache;
