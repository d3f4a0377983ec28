use thiserror::Error;

/// Errors from password hashing and token handling
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),

    #[error("Failed to create token: {0}")]
    TokenCreation(String),

    #[error("Invalid token: {0}")]
    InvalidToken(String),
}
