//! SQLite implementation of the favorites repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::Favorite;
use crate::domain::repositories::FavoriteRepository;
use crate::error::AppError;

/// SQLite repository for the `favorites` table.
///
/// Existence checks and mutations run as separate statements with no
/// surrounding transaction; the composite primary key rejects a duplicate
/// that slips past the check.
pub struct SqliteFavoriteRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteFavoriteRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FavoriteRepository for SqliteFavoriteRepository {
    async fn exists(&self, favorite: Favorite) -> Result<bool, AppError> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM favorites
            WHERE user_id = ? AND character_id = ?
            "#,
        )
        .bind(favorite.user_id)
        .bind(favorite.character_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count > 0)
    }

    async fn insert(&self, favorite: Favorite) -> Result<i64, AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO favorites (user_id, character_id)
            VALUES (?, ?)
            "#,
        )
        .bind(favorite.user_id)
        .bind(favorite.character_id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn delete(&self, favorite: Favorite) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            DELETE FROM favorites
            WHERE user_id = ? AND character_id = ?
            "#,
        )
        .bind(favorite.user_id)
        .bind(favorite.character_id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected())
    }

    async fn list_by_user(&self, user_id: i64) -> Result<Vec<Favorite>, AppError> {
        let rows: Vec<(i64, i64)> = sqlx::query_as(
            r#"
            SELECT user_id, character_id
            FROM favorites
            WHERE user_id = ?
            ORDER BY rowid
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|(user_id, character_id)| Favorite::new(user_id, character_id))
            .collect())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}
