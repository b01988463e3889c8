//! Handlers for favorites endpoints.
//!
//! There is a single implicit user; requests that omit `userId` act on
//! [`DEFAULT_USER_ID`].

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::api::dto::character::CharacterListResponse;
use crate::api::dto::favorite::{AddFavoriteRequest, MessageResponse, RemoveFavoriteQuery};
use crate::error::AppError;
use crate::state::AppState;

pub const DEFAULT_USER_ID: &str = "1";

/// Lists the default user's favorite characters.
///
/// # Endpoint
///
/// `GET /favorites`
///
/// # Errors
///
/// Returns 500 if the store or the upstream API fails.
pub async fn favorites_list_handler(
    State(state): State<AppState>,
) -> Result<Json<CharacterListResponse>, AppError> {
    let characters = state
        .favorites_service
        .list_favorites(DEFAULT_USER_ID)
        .await?;

    Ok(Json(CharacterListResponse::new(characters)))
}

/// Adds a character to a user's favorites.
///
/// # Endpoint
///
/// `POST /favorites/new`
///
/// # Request Body
///
/// ```json
/// { "userId": "1", "characterId": "5" }
/// ```
///
/// # Errors
///
/// Returns 400 if an id is missing or invalid, or the character is already
/// a favorite.
/// Returns 500 on database errors.
pub async fn add_favorite_handler(
    State(state): State<AppState>,
    payload: Result<Json<AddFavoriteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let Json(payload) = payload?;

    let user_id = match payload.user_id {
        None => DEFAULT_USER_ID.to_string(),
        Some(id) => id.map(|id| id.to_string()).unwrap_or_default(),
    };
    let character_id = payload
        .character_id
        .map(|id| id.to_string())
        .unwrap_or_default();

    state
        .favorites_service
        .add(&user_id, &character_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("added character to favorites")),
    ))
}

/// Removes a character from a user's favorites.
///
/// # Endpoint
///
/// `DELETE /favorites/{character_id}?userId=1`
///
/// # Errors
///
/// Returns 400 if an id is invalid or the character is not a favorite.
/// Returns 500 on database errors.
pub async fn delete_favorite_handler(
    Path(character_id): Path<String>,
    Query(query): Query<RemoveFavoriteQuery>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    let user_id = query.user_id.as_deref().unwrap_or(DEFAULT_USER_ID);

    state
        .favorites_service
        .remove(user_id, &character_id)
        .await?;

    Ok(Json(MessageResponse::new("deleted character from favorites")))
}
