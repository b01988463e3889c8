//! Infrastructure layer for external integrations.
//!
//! - [`cache`] - In-process response cache
//! - [`persistence`] - SQLite favorites repository
//! - [`upstream`] - Upstream API transport and fetch client

pub mod cache;
pub mod persistence;
pub mod upstream;
