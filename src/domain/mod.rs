//! Domain layer: entities and repository contracts.
//!
//! - [`entities`] - Character views and favorites
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or HTTP concerns.

pub mod entities;
pub mod repositories;
