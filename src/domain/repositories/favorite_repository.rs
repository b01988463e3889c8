//! Repository trait for the favorites table.

use crate::domain::entities::Favorite;
use crate::error::AppError;
use async_trait::async_trait;

/// Storage for user-to-character favorites.
///
/// The composite `(user_id, character_id)` key is the only uniqueness guard;
/// callers perform the existence check themselves before mutating.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteFavoriteRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Returns whether the pair is stored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn exists(&self, favorite: Favorite) -> Result<bool, AppError>;

    /// Inserts the pair and returns the new row id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors, including a primary key
    /// violation when a concurrent insert won the race.
    async fn insert(&self, favorite: Favorite) -> Result<i64, AppError>;

    /// Deletes the pair and returns the number of rows removed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn delete(&self, favorite: Favorite) -> Result<u64, AppError>;

    /// Lists a user's favorites in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn list_by_user(&self, user_id: i64) -> Result<Vec<Favorite>, AppError>;

    /// Round-trips a trivial query; used by the health endpoint.
    async fn ping(&self) -> Result<(), AppError>;
}
