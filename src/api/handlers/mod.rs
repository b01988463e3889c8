//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod characters;
pub mod favorites;
pub mod health;
pub mod methods;

pub use characters::{character_detail_handler, character_list_handler};
pub use favorites::{add_favorite_handler, delete_favorite_handler, favorites_list_handler};
pub use health::health_handler;
pub use methods::{only_delete, only_get, only_post};
