use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::api::errors::ApiError;
use crate::api::middleware::{JwtAuth, ValidatedJson};
use crate::domain::bookmark::{Bookmark, BookmarkChanges};
use crate::domain::repositories::RepositoryError;
use crate::domain::user::User;
use crate::state::AppState;

/// Request body for creating a bookmark
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBookmarkRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "title should not be empty"))]
    pub title: String,

    pub description: Option<String>,

    #[serde(default)]
    #[validate(length(min = 1, message = "link should not be empty"))]
    pub link: String,
}

/// Request body for editing a bookmark; omitted fields are kept
#[derive(Debug, Deserialize, Validate)]
pub struct EditBookmarkRequest {
    #[validate(length(min = 1, message = "title should not be empty"))]
    pub title: Option<String>,

    pub description: Option<String>,

    #[validate(length(min = 1, message = "link should not be empty"))]
    pub link: Option<String>,
}

/// Full bookmark representation
#[derive(Debug, Serialize)]
pub struct BookmarkResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub link: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Bookmark> for BookmarkResponse {
    fn from(bookmark: &Bookmark) -> Self {
        Self {
            id: bookmark.id(),
            user_id: bookmark.user_id(),
            title: bookmark.title().to_string(),
            description: bookmark.description().map(str::to_string),
            link: bookmark.link().to_string(),
            created_at: bookmark.created_at(),
            updated_at: bookmark.updated_at(),
        }
    }
}

/// Owner summary embedded in the create response
#[derive(Debug, Serialize)]
pub struct BookmarkOwner {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
}

/// Response from bookmark creation
#[derive(Debug, Serialize)]
pub struct CreatedBookmarkResponse {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub link: String,
    pub user: BookmarkOwner,
}

impl CreatedBookmarkResponse {
    fn new(bookmark: &Bookmark, owner: &User) -> Self {
        Self {
            id: bookmark.id(),
            title: bookmark.title().to_string(),
            description: bookmark.description().map(str::to_string),
            link: bookmark.link().to_string(),
            user: BookmarkOwner {
                first_name: owner.first_name.clone(),
                last_name: owner.last_name.clone(),
                email: owner.email.to_string(),
            },
        }
    }
}

fn bookmark_not_found(id: Uuid) -> ApiError {
    ApiError::not_found(format!("Bookmark with {} doesn't exist", id))
}

fn scoped(id: Uuid) -> impl FnOnce(RepositoryError) -> ApiError {
    move |err| match err {
        RepositoryError::NotFound { .. } => bookmark_not_found(id),
        other => ApiError::from(other),
    }
}

/// List the caller's bookmarks
///
/// GET /bookmarks
pub async fn list_bookmarks(
    State(state): State<AppState>,
    JwtAuth(user_id): JwtAuth,
) -> Result<Json<Vec<BookmarkResponse>>, ApiError> {
    let bookmarks = state.bookmarks.find_by_owner(user_id).await?;

    Ok(Json(bookmarks.iter().map(BookmarkResponse::from).collect()))
}

/// Get one of the caller's bookmarks
///
/// GET /bookmarks/:id
pub async fn get_bookmark(
    State(state): State<AppState>,
    JwtAuth(user_id): JwtAuth,
    Path(id): Path<Uuid>,
) -> Result<Json<BookmarkResponse>, ApiError> {
    let bookmark = state
        .bookmarks
        .find_for_owner(id, user_id)
        .await?
        .ok_or_else(|| bookmark_not_found(id))?;

    Ok(Json(BookmarkResponse::from(&bookmark)))
}

/// Create a bookmark owned by the caller
///
/// POST /bookmarks
pub async fn create_bookmark(
    State(state): State<AppState>,
    JwtAuth(user_id): JwtAuth,
    ValidatedJson(req): ValidatedJson<CreateBookmarkRequest>,
) -> Result<(StatusCode, Json<CreatedBookmarkResponse>), ApiError> {
    let owner = state
        .users
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::unauthorized("User no longer exists"))?;

    let bookmark = Bookmark::new(user_id, req.title, req.description, req.link)?;
    state.bookmarks.create(&bookmark).await?;

    tracing::info!(user_id = %user_id, bookmark_id = %bookmark.id(), "bookmark created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedBookmarkResponse::new(&bookmark, &owner)),
    ))
}

/// Edit one of the caller's bookmarks
///
/// PATCH /bookmarks/:id
pub async fn edit_bookmark(
    State(state): State<AppState>,
    JwtAuth(user_id): JwtAuth,
    Path(id): Path<Uuid>,
    ValidatedJson(req): ValidatedJson<EditBookmarkRequest>,
) -> Result<Json<BookmarkResponse>, ApiError> {
    let mut bookmark = state
        .bookmarks
        .find_for_owner(id, user_id)
        .await?
        .ok_or_else(|| bookmark_not_found(id))?;

    bookmark.apply(BookmarkChanges {
        title: req.title,
        description: req.description,
        link: req.link,
    })?;

    state.bookmarks.update(&bookmark).await.map_err(scoped(id))?;

    Ok(Json(BookmarkResponse::from(&bookmark)))
}

/// Delete one of the caller's bookmarks
///
/// DELETE /bookmarks/:id
pub async fn delete_bookmark(
    State(state): State<AppState>,
    JwtAuth(user_id): JwtAuth,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state
        .bookmarks
        .delete(id, user_id)
        .await
        .map_err(scoped(id))?;

    tracing::info!(user_id = %user_id, bookmark_id = %id, "bookmark deleted");

    Ok(StatusCode::NO_CONTENT)
}
