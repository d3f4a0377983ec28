use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use validator::ValidationErrors;

use crate::domain::errors::DomainError;
use crate::domain::repositories::RepositoryError;

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// API error type with HTTP status code and message
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub details: Option<Vec<FieldError>>,
}

impl ApiError {
    /// Creates a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            details: None,
        }
    }

    /// Creates a 400 Bad Request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Creates a 401 Unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    /// Creates a 403 Forbidden error
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, message)
    }

    /// Creates a 404 Not Found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Creates a 409 Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    /// Creates a 500 Internal Server Error
    ///
    /// The detail is logged; clients only see a generic message.
    pub fn internal_server_error(detail: impl std::fmt::Display) -> Self {
        tracing::error!(error = %detail, "internal server error");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }

    /// Creates a 400 with per-field details
    pub fn validation(details: Vec<FieldError>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: "Validation failed".to_string(),
            details: Some(details),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self.details {
            Some(details) => json!({
                "error": self.message,
                "details": details,
            }),
            None => json!({
                "error": self.message
            }),
        };

        (self.status, Json(body)).into_response()
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let mut details: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| FieldError {
                    field: field.to_string(),
                    message: error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field)),
                })
            })
            .collect();
        details.sort_by(|a, b| a.field.cmp(&b.field));

        Self::validation(details)
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Conflict(_) => Self::conflict(err.to_string()),
            RepositoryError::NotFound { .. } => Self::not_found(err.to_string()),
            RepositoryError::Database(_) | RepositoryError::Corrupt(_) => {
                Self::internal_server_error(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;
    use validator::Validate;

    #[derive(Validate)]
    struct Payload {
        #[validate(email(message = "email must be an email"))]
        email: String,
        #[validate(length(min = 1, message = "password should not be empty"))]
        password: String,
    }

    #[test]
    fn validation_errors_become_field_details() {
        let payload = Payload {
            email: "nope".to_string(),
            password: String::new(),
        };
        let err = ApiError::from(payload.validate().unwrap_err());

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(
            err.details.unwrap(),
            vec![
                FieldError {
                    field: "email".to_string(),
                    message: "email must be an email".to_string(),
                },
                FieldError {
                    field: "password".to_string(),
                    message: "password should not be empty".to_string(),
                },
            ]
        );
    }

    #[test]
    fn conflict_maps_to_409() {
        let err = ApiError::from(RepositoryError::Conflict("email".to_string()));
        assert_eq!(err.status, StatusCode::CONFLICT);
        assert_eq!(err.message, "email already in use.");
    }

    #[test]
    fn not_found_maps_to_404() {
        let err = ApiError::from(RepositoryError::NotFound {
            entity: "Bookmark",
            id: Uuid::nil(),
        });
        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn database_errors_are_not_leaked() {
        let err = ApiError::from(RepositoryError::Database("connection refused".to_string()));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.message.contains("connection refused"));
    }
}
