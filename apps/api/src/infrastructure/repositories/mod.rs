// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod in_memory;
pub mod postgres_bookmark_repository;
pub mod postgres_user_repository;

mod sqlx_errors;

pub use in_memory::{InMemoryBookmarkRepository, InMemoryUserRepository};
pub use postgres_bookmark_repository::PostgresBookmarkRepository;
pub use postgres_user_repository::PostgresUserRepository;
