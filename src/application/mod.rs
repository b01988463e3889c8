//! Application layer services implementing business logic.
//!
//! Services consume repository traits and the upstream fetch client and
//! provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::character_service::CharacterService`] - Character resolution and listing
//! - [`services::favorites_service::FavoritesService`] - Favorites add/remove/list
pub mod services;
