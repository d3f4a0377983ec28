use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::api::errors::ApiError;
use crate::api::middleware::{JwtAuth, ValidatedJson};
use crate::domain::user::{Email, ProfileChanges, User};
use crate::state::AppState;

/// Full public view of a user (never includes the password hash)
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.to_string(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Profile returned by `/users/me` and `PATCH /users`
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub id: Uuid,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for ProfileResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.to_string(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            created_at: user.created_at,
        }
    }
}

/// Request body for editing the current user
#[derive(Debug, Deserialize, Validate)]
pub struct EditUserRequest {
    #[validate(email(message = "email must be a valid email address"))]
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

async fn load_current_user(state: &AppState, user_id: Uuid) -> Result<User, ApiError> {
    state
        .users
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::unauthorized("User no longer exists"))
}

/// Get the authenticated user's profile
///
/// GET /users/me
pub async fn get_me(
    State(state): State<AppState>,
    JwtAuth(user_id): JwtAuth,
) -> Result<Json<ProfileResponse>, ApiError> {
    let user = load_current_user(&state, user_id).await?;
    Ok(Json(ProfileResponse::from(&user)))
}

/// Edit the authenticated user's profile
///
/// PATCH /users
pub async fn edit_user(
    State(state): State<AppState>,
    JwtAuth(user_id): JwtAuth,
    ValidatedJson(req): ValidatedJson<EditUserRequest>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let mut user = load_current_user(&state, user_id).await?;

    let changes = ProfileChanges {
        email: req.email.map(Email::new).transpose()?,
        first_name: req.first_name,
        last_name: req.last_name,
    };

    if !changes.is_empty() {
        user.apply(changes);
        state.users.update(&user).await?;
        tracing::info!(user_id = %user.id, "user profile updated");
    }

    Ok(Json(ProfileResponse::from(&user)))
}
