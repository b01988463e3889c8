//! # Character Catalog
//!
//! A small catalog service that fronts a public character API with an
//! in-process response cache and keeps a local list of favorite characters.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Character views, favorites, repository traits
//! - **Application Layer** ([`application`]) - Character resolution and favorites logic
//! - **Infrastructure Layer** ([`infrastructure`]) - Response cache, upstream client, SQLite
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Request Flow
//!
//! HTTP route → ([`application::services::CharacterService`] |
//! [`application::services::FavoritesService`]) →
//! [`infrastructure::upstream::FetchClient`] →
//! [`infrastructure::cache::MemoryCache`]
//!
//! ## Quick Start
//!
//! ```bash
//! export SWAPI_BASE_URL="https://swapi.dev"
//! export DATABASE_URL="sqlite://catalog.db"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;
