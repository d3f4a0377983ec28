use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::api::errors::ApiError;
use crate::api::handlers::users::UserResponse;
use crate::api::middleware::ValidatedJson;
use crate::auth::jwt::create_token;
use crate::auth::password::{hash_password, verify_password};
use crate::domain::user::{Email, User};
use crate::state::AppState;

const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Credentials body shared by sign-up and sign-in
#[derive(Debug, Deserialize, Validate)]
pub struct AuthRequest {
    #[serde(default)]
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "password should not be empty"))]
    pub password: String,
}

/// Response from successful sign-up
#[derive(Debug, Serialize)]
pub struct SignUpResponse {
    pub id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Response from successful sign-in
#[derive(Debug, Serialize)]
pub struct SignInResponse {
    pub user: UserResponse,
    pub token: String,
}

/// Register a new user
///
/// POST /auth/signup
pub async fn sign_up(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<AuthRequest>,
) -> Result<(StatusCode, Json<SignUpResponse>), ApiError> {
    let email = Email::new(req.email)?;

    let password_hash = hash_password(&req.password).map_err(ApiError::internal_server_error)?;

    let user = User::new(email, password_hash);
    state.users.create(&user).await?;

    tracing::info!(user_id = %user.id, "user signed up");

    Ok((
        StatusCode::CREATED,
        Json(SignUpResponse {
            id: user.id,
            email: user.email.to_string(),
            created_at: user.created_at,
        }),
    ))
}

/// Sign in with email and password
///
/// POST /auth/signin
pub async fn sign_in(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<AuthRequest>,
) -> Result<Json<SignInResponse>, ApiError> {
    let email = Email::new(req.email)?;

    let user = match state.users.find_by_email(&email).await? {
        Some(user) => user,
        None => {
            tracing::warn!("sign-in attempt for unknown email");
            return Err(ApiError::forbidden(INVALID_CREDENTIALS));
        }
    };

    let valid = verify_password(&req.password, &user.password_hash)
        .map_err(ApiError::internal_server_error)?;

    if !valid {
        tracing::warn!(user_id = %user.id, "sign-in rejected: wrong password");
        return Err(ApiError::forbidden(INVALID_CREDENTIALS));
    }

    let token = create_token(
        user.id,
        user.email.as_str(),
        &state.jwt.secret,
        state.jwt.ttl(),
    )
    .map_err(ApiError::internal_server_error)?;

    tracing::info!(user_id = %user.id, "user signed in");

    Ok(Json(SignInResponse {
        user: UserResponse::from(&user),
        token,
    }))
}

/// Health check endpoint
///
/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}
