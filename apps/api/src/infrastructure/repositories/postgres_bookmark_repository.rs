use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::sqlx_errors::map_sqlx_error;
use crate::domain::bookmark::Bookmark;
use crate::domain::repositories::errors::RepositoryResult;
use crate::domain::repositories::{BookmarkRepository, RepositoryError};

/// PostgreSQL implementation of BookmarkRepository
///
/// Every statement carries `user_id = $n` so rows belonging to other users
/// are invisible to the caller.
pub struct PostgresBookmarkRepository {
    pool: PgPool,
}

impl PostgresBookmarkRepository {
    /// Creates a new PostgresBookmarkRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct BookmarkRow {
    id: Uuid,
    user_id: Uuid,
    title: String,
    description: Option<String>,
    link: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<BookmarkRow> for Bookmark {
    fn from(r: BookmarkRow) -> Self {
        Bookmark::from_persistence(
            r.id,
            r.user_id,
            r.title,
            r.description,
            r.link,
            r.created_at,
            r.updated_at,
        )
    }
}

#[async_trait]
impl BookmarkRepository for PostgresBookmarkRepository {
    async fn find_by_owner(&self, user_id: Uuid) -> RepositoryResult<Vec<Bookmark>> {
        let rows = sqlx::query_as::<_, BookmarkRow>(
            r#"
            SELECT id, user_id, title, description, link, created_at, updated_at
            FROM bookmarks
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to find bookmarks by owner", e))?;

        Ok(rows.into_iter().map(Bookmark::from).collect())
    }

    async fn find_for_owner(&self, id: Uuid, user_id: Uuid) -> RepositoryResult<Option<Bookmark>> {
        let row = sqlx::query_as::<_, BookmarkRow>(
            r#"
            SELECT id, user_id, title, description, link, created_at, updated_at
            FROM bookmarks
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to find bookmark by id", e))?;

        Ok(row.map(Bookmark::from))
    }

    async fn create(&self, bookmark: &Bookmark) -> RepositoryResult<()> {
        sqlx::query(
            r#"
            INSERT INTO bookmarks (
                id, user_id, title, description, link, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(bookmark.id())
        .bind(bookmark.user_id())
        .bind(bookmark.title())
        .bind(bookmark.description())
        .bind(bookmark.link())
        .bind(bookmark.created_at())
        .bind(bookmark.updated_at())
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to create bookmark", e))?;

        Ok(())
    }

    async fn update(&self, bookmark: &Bookmark) -> RepositoryResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE bookmarks
            SET title = $3, description = $4, link = $5, updated_at = $6
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(bookmark.id())
        .bind(bookmark.user_id())
        .bind(bookmark.title())
        .bind(bookmark.description())
        .bind(bookmark.link())
        .bind(bookmark.updated_at())
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to update bookmark", e))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound {
                entity: "Bookmark",
                id: bookmark.id(),
            });
        }

        Ok(())
    }

    async fn delete(&self, id: Uuid, user_id: Uuid) -> RepositoryResult<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM bookmarks WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("Failed to delete bookmark", e))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound {
                entity: "Bookmark",
                id,
            });
        }

        Ok(())
    }
}
