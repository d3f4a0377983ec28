use async_trait::async_trait;
use uuid::Uuid;

use super::errors::RepositoryResult;
use crate::domain::bookmark::Bookmark;

/// Repository trait for bookmarks
///
/// Every lookup and write is scoped by the owning user's id. A bookmark
/// owned by somebody else behaves exactly like one that does not exist.
#[async_trait]
pub trait BookmarkRepository: Send + Sync {
    /// All bookmarks owned by `user_id`, newest first
    async fn find_by_owner(&self, user_id: Uuid) -> RepositoryResult<Vec<Bookmark>>;

    /// A single bookmark, only if owned by `user_id`
    async fn find_for_owner(&self, id: Uuid, user_id: Uuid) -> RepositoryResult<Option<Bookmark>>;

    /// Insert a new bookmark
    async fn create(&self, bookmark: &Bookmark) -> RepositoryResult<()>;

    /// Persist edits; `NotFound` unless the row exists for `bookmark.user_id()`
    async fn update(&self, bookmark: &Bookmark) -> RepositoryResult<()>;

    /// Delete by id; `NotFound` unless the row exists for `user_id`
    async fn delete(&self, id: Uuid, user_id: Uuid) -> RepositoryResult<()>;
}
