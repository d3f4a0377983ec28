use async_trait::async_trait;
use uuid::Uuid;

use super::errors::RepositoryResult;
use crate::domain::user::{Email, User};

/// Repository trait for users
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user; fails with `Conflict("email")` if the address is taken
    async fn create(&self, user: &User) -> RepositoryResult<()>;

    /// Find a user by ID
    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<User>>;

    /// Find a user by email address
    async fn find_by_email(&self, email: &Email) -> RepositoryResult<Option<User>>;

    /// Persist profile changes (email, names, updated_at)
    async fn update(&self, user: &User) -> RepositoryResult<()>;
}
