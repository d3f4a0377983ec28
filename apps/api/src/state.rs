use sqlx::PgPool;
use std::sync::Arc;

use crate::config::JwtConfig;
use crate::domain::repositories::{BookmarkRepository, UserRepository};
use crate::infrastructure::repositories::{
    InMemoryBookmarkRepository, InMemoryUserRepository, PostgresBookmarkRepository,
    PostgresUserRepository,
};

/// Shared handler state: repository ports plus token settings
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub bookmarks: Arc<dyn BookmarkRepository>,
    pub jwt: Arc<JwtConfig>,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserRepository>,
        bookmarks: Arc<dyn BookmarkRepository>,
        jwt: JwtConfig,
    ) -> Self {
        Self {
            users,
            bookmarks,
            jwt: Arc::new(jwt),
        }
    }

    /// State backed by PostgreSQL repositories sharing one pool
    pub fn postgres(pool: PgPool, jwt: JwtConfig) -> Self {
        Self::new(
            Arc::new(PostgresUserRepository::new(pool.clone())),
            Arc::new(PostgresBookmarkRepository::new(pool)),
            jwt,
        )
    }

    /// State backed by process-local storage
    pub fn in_memory(jwt: JwtConfig) -> Self {
        Self::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryBookmarkRepository::new()),
            jwt,
        )
    }
}
