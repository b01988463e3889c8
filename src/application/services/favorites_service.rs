//! Favorites management service.

use std::sync::Arc;

use futures::future::try_join_all;
use tracing::{error, info};

use crate::application::services::CharacterService;
use crate::domain::entities::{CharacterSummary, Favorite};
use crate::domain::repositories::FavoriteRepository;
use crate::error::AppError;

/// Service for the user-to-character favorites table.
///
/// Identifiers arrive as strings from the HTTP layer and are parsed here.
/// Presence is checked before every mutation; the check and the write are
/// not wrapped in a transaction, so a racing duplicate insert surfaces as
/// [`AppError::Store`] from the primary key constraint.
pub struct FavoritesService<R: FavoriteRepository> {
    repository: Arc<R>,
    characters: Arc<CharacterService>,
}

impl<R: FavoriteRepository> FavoritesService<R> {
    /// Creates a new favorites service.
    pub fn new(repository: Arc<R>, characters: Arc<CharacterService>) -> Self {
        Self {
            repository,
            characters,
        }
    }

    /// Returns whether `character_id` is a favorite of `user_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if either id is missing or not an integer.
    /// Returns [`AppError::Store`] if the lookup fails; a failed lookup is
    /// never reported as "not a favorite".
    pub async fn is_favorite(&self, user_id: &str, character_id: &str) -> Result<bool, AppError> {
        let favorite = parse_favorite(user_id, character_id)?;
        self.check(favorite).await
    }

    /// Adds a favorite and returns the new row id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if either id is missing or not an integer.
    /// Returns [`AppError::Conflict`] if the pair is already stored.
    /// Returns [`AppError::Store`] on database errors.
    pub async fn add(&self, user_id: &str, character_id: &str) -> Result<i64, AppError> {
        let favorite = parse_favorite(user_id, character_id)?;

        if self.check(favorite).await? {
            return Err(AppError::conflict("character is already in favorites"));
        }

        let row_id = self.repository.insert(favorite).await.map_err(|e| {
            error!(error = %e, ?favorite, "Favorite insert failed");
            AppError::store("not able to add to favorites")
        })?;

        info!(
            user_id = favorite.user_id,
            character_id = favorite.character_id,
            row_id,
            "Favorite inserted"
        );

        Ok(row_id)
    }

    /// Removes a favorite.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if either id is missing or not an integer.
    /// Returns [`AppError::Conflict`] if the pair is not stored.
    /// Returns [`AppError::Store`] on database errors.
    pub async fn remove(&self, user_id: &str, character_id: &str) -> Result<(), AppError> {
        let favorite = parse_favorite(user_id, character_id)?;

        if !self.check(favorite).await? {
            return Err(AppError::conflict("character not present in favorites"));
        }

        let deleted = self.repository.delete(favorite).await.map_err(|e| {
            error!(error = %e, ?favorite, "Favorite delete failed");
            AppError::store("not able to delete from favorites")
        })?;

        info!(
            user_id = favorite.user_id,
            character_id = favorite.character_id,
            deleted,
            "Favorite deleted"
        );

        Ok(())
    }

    /// Lists a user's favorite characters in the order they were stored.
    ///
    /// Each character goes through the full single-character resolution and
    /// is then narrowed to the summary fields. Resolutions run concurrently.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `user_id` is missing or not an integer.
    /// Returns [`AppError::Store`] if the favorites cannot be read.
    /// Returns [`AppError::Upstream`] if any character fails to resolve.
    pub async fn list_favorites(&self, user_id: &str) -> Result<Vec<CharacterSummary>, AppError> {
        let user_id = parse_id(user_id, "userId")?;

        let favorites = self.repository.list_by_user(user_id).await.map_err(|e| {
            error!(error = %e, user_id, "Favorites listing failed");
            AppError::store("not able to fetch from favorites")
        })?;

        try_join_all(favorites.iter().map(|favorite| async move {
            let character = self
                .characters
                .get_character(&favorite.character_id.to_string())
                .await?;
            Ok::<_, AppError>(CharacterSummary::from(character))
        }))
        .await
    }

    /// Checks that the favorites table is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] if the database does not answer.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }

    async fn check(&self, favorite: Favorite) -> Result<bool, AppError> {
        self.repository.exists(favorite).await.map_err(|e| {
            error!(error = %e, ?favorite, "Favorite lookup failed");
            AppError::store("something went wrong while checking favorite. please try again.")
        })
    }
}

fn parse_favorite(user_id: &str, character_id: &str) -> Result<Favorite, AppError> {
    let user_id = parse_id(user_id, "userId")?;
    let character_id = parse_id(character_id, "characterId")?;
    Ok(Favorite::new(user_id, character_id))
}

/// Parses a string-encoded integer id.
///
/// # Errors
///
/// Returns [`AppError::Validation`] naming `field` if the value is empty or
/// not an integer.
fn parse_id(value: &str, field: &str) -> Result<i64, AppError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| AppError::bad_request(format!("not a valid {}", field)))
}
