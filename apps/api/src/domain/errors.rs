use thiserror::Error;

/// Errors raised when a domain invariant is violated
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    #[error("{0} cannot be empty")]
    EmptyField(&'static str),
}
