use thiserror::Error;
use uuid::Uuid;

/// Errors returned by repository implementations
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A unique constraint rejected the write; carries the offending field
    #[error("{0} already in use.")]
    Conflict(String),

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: Uuid },

    #[error("Database error: {0}")]
    Database(String),

    /// A stored row could not be turned back into a domain value
    #[error("Invalid data in storage: {0}")]
    Corrupt(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
