//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mocks are generated via `mockall`
//! for unit tests.

pub mod favorite_repository;

pub use favorite_repository::FavoriteRepository;

#[cfg(test)]
pub use favorite_repository::MockFavoriteRepository;
