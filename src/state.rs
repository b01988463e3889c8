//! Shared application state injected into handlers.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::application::services::{CharacterService, FavoritesService};
use crate::infrastructure::cache::ResponseCache;
use crate::infrastructure::persistence::SqliteFavoriteRepository;
use crate::infrastructure::upstream::{FetchClient, HttpTransport};

#[derive(Clone)]
pub struct AppState {
    pub character_service: Arc<CharacterService>,
    pub favorites_service: Arc<FavoritesService<SqliteFavoriteRepository>>,
    pub cache: Arc<dyn ResponseCache>,
}

impl AppState {
    /// Wires services over the given pool, transport and cache.
    ///
    /// The cache instance is owned by the fetch client and shared with the
    /// health endpoint; nothing reaches it globally.
    pub fn new(
        pool: Arc<SqlitePool>,
        transport: Arc<dyn HttpTransport>,
        cache: Arc<dyn ResponseCache>,
        upstream_base_url: &str,
        cache_ttl_seconds: u64,
    ) -> Self {
        let fetcher = Arc::new(FetchClient::new(
            transport,
            cache.clone(),
            cache_ttl_seconds,
        ));
        let character_service = Arc::new(CharacterService::new(fetcher, upstream_base_url));

        let favorite_repository = Arc::new(SqliteFavoriteRepository::new(pool));
        let favorites_service = Arc::new(FavoritesService::new(
            favorite_repository,
            character_service.clone(),
        ));

        Self {
            character_service,
            favorites_service,
            cache,
        }
    }
}
