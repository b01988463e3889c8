//! API route configuration.

use crate::api::handlers::{
    add_favorite_handler, character_detail_handler, character_list_handler,
    delete_favorite_handler, favorites_list_handler, only_delete, only_get, only_post,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// Character and favorites routes.
///
/// # Endpoints
///
/// - `GET    /characters`                 - List characters (partial view)
/// - `GET    /characters/{character_id}`  - Full character view
/// - `GET    /favorites`                  - Default user's favorite characters
/// - `POST   /favorites/new`              - Add a favorite
/// - `DELETE /favorites/{character_id}`   - Remove a favorite (`?userId=`, default 1)
///
/// Any other method on these paths returns 405 with a plain text body.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/characters", get(character_list_handler).fallback(only_get))
        .route(
            "/characters/{character_id}",
            get(character_detail_handler).fallback(only_get),
        )
        .route("/favorites", get(favorites_list_handler).fallback(only_get))
        .route(
            "/favorites/new",
            post(add_favorite_handler).fallback(only_post),
        )
        .route(
            "/favorites/{character_id}",
            delete(delete_favorite_handler).fallback(only_delete),
        )
}
