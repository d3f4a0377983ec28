//! In-memory repository adapters.
//!
//! Used for local development without PostgreSQL and by the HTTP tests.
//! They honour the same uniqueness and ownership rules as the SQL adapters.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::bookmark::Bookmark;
use crate::domain::repositories::errors::RepositoryResult;
use crate::domain::repositories::{BookmarkRepository, RepositoryError, UserRepository};
use crate::domain::user::{Email, User};

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn email_taken(users: &HashMap<Uuid, User>, email: &Email, except: Uuid) -> bool {
    users
        .values()
        .any(|existing| existing.id != except && existing.email == *email)
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &User) -> RepositoryResult<()> {
        let mut users = self.users.write().await;
        if email_taken(&users, &user.email, user.id) || users.contains_key(&user.id) {
            return Err(RepositoryError::Conflict("email".to_string()));
        }
        users.insert(user.id, user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<User>> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> RepositoryResult<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|user| user.email == *email)
            .cloned())
    }

    async fn update(&self, user: &User) -> RepositoryResult<()> {
        let mut users = self.users.write().await;
        if !users.contains_key(&user.id) {
            return Err(RepositoryError::NotFound {
                entity: "User",
                id: user.id,
            });
        }
        if email_taken(&users, &user.email, user.id) {
            return Err(RepositoryError::Conflict("email".to_string()));
        }
        users.insert(user.id, user.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryBookmarkRepository {
    bookmarks: RwLock<HashMap<Uuid, Bookmark>>,
}

impl InMemoryBookmarkRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookmarkRepository for InMemoryBookmarkRepository {
    async fn find_by_owner(&self, user_id: Uuid) -> RepositoryResult<Vec<Bookmark>> {
        let mut owned: Vec<Bookmark> = self
            .bookmarks
            .read()
            .await
            .values()
            .filter(|bookmark| bookmark.is_owned_by(user_id))
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(owned)
    }

    async fn find_for_owner(&self, id: Uuid, user_id: Uuid) -> RepositoryResult<Option<Bookmark>> {
        Ok(self
            .bookmarks
            .read()
            .await
            .get(&id)
            .filter(|bookmark| bookmark.is_owned_by(user_id))
            .cloned())
    }

    async fn create(&self, bookmark: &Bookmark) -> RepositoryResult<()> {
        let mut bookmarks = self.bookmarks.write().await;
        if bookmarks.contains_key(&bookmark.id()) {
            return Err(RepositoryError::Conflict("id".to_string()));
        }
        bookmarks.insert(bookmark.id(), bookmark.clone());
        Ok(())
    }

    async fn update(&self, bookmark: &Bookmark) -> RepositoryResult<()> {
        let mut bookmarks = self.bookmarks.write().await;
        match bookmarks.get_mut(&bookmark.id()) {
            Some(stored) if stored.is_owned_by(bookmark.user_id()) => {
                *stored = bookmark.clone();
                Ok(())
            }
            _ => Err(RepositoryError::NotFound {
                entity: "Bookmark",
                id: bookmark.id(),
            }),
        }
    }

    async fn delete(&self, id: Uuid, user_id: Uuid) -> RepositoryResult<()> {
        let mut bookmarks = self.bookmarks.write().await;
        let owned = bookmarks
            .get(&id)
            .is_some_and(|stored| stored.is_owned_by(user_id));
        if !owned {
            return Err(RepositoryError::NotFound {
                entity: "Bookmark",
                id,
            });
        }
        bookmarks.remove(&id);
        Ok(())
    }
}
