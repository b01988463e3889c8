//! Core domain entities.
//!
//! - [`Character`] / [`CharacterSummary`] - Denormalized character views
//! - [`Vehicle`], [`Starship`], [`Film`] - Sub-resources embedded in a character
//! - [`Favorite`] - A stored user-to-character association

pub mod character;
pub mod favorite;

pub use character::{Character, CharacterSummary, Film, Starship, Vehicle};
pub use favorite::Favorite;
