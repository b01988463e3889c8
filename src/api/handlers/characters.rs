//! Handlers for character endpoints.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::character::{CharacterListResponse, CharacterResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Lists characters with id, name, species and homeworld.
///
/// # Endpoint
///
/// `GET /characters`
///
/// # Response
///
/// ```json
/// {
///   "status": "success",
///   "characters": [
///     { "id": "1", "name": "Luke Skywalker", "species": null, "homeworld": "Tatooine" }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns 500 if the upstream API fails.
pub async fn character_list_handler(
    State(state): State<AppState>,
) -> Result<Json<CharacterListResponse>, AppError> {
    let characters = state.character_service.list_characters().await?;

    Ok(Json(CharacterListResponse::new(characters)))
}

/// Returns the full view of one character.
///
/// # Endpoint
///
/// `GET /characters/{character_id}`
///
/// # Errors
///
/// Returns 400 if the id is empty.
/// Returns 500 if the character or any of its sub-resources cannot be fetched.
pub async fn character_detail_handler(
    Path(character_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<CharacterResponse>, AppError> {
    let character = state.character_service.get_character(&character_id).await?;

    Ok(Json(CharacterResponse::new(character)))
}
