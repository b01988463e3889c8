//! Business logic services for the application layer.

pub mod character_service;
pub mod favorites_service;

pub use character_service::CharacterService;
pub use favorites_service::FavoritesService;
