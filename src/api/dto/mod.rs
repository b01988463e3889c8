//! Data Transfer Objects for API requests and responses.
//!
//! Successful responses share the `{ "status": "success", ... }` envelope.

pub mod character;
pub mod favorite;
pub mod health;
