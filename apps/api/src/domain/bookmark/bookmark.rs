use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::errors::DomainError;

/// Bookmark entity
///
/// A link saved by exactly one user. The owner never changes after creation.
///
/// # Invariants
/// - Title cannot be blank
/// - Link cannot be blank
/// - `updated_at` is never earlier than `created_at`
///
/// # Example
/// ```
/// use bookmarks_api::domain::bookmark::Bookmark;
/// use uuid::Uuid;
///
/// let bookmark = Bookmark::new(
///     Uuid::new_v4(),
///     "Rust book".to_string(),
///     None,
///     "https://doc.rust-lang.org/book/".to_string(),
/// ).expect("valid bookmark");
///
/// assert_eq!(bookmark.title(), "Rust book");
/// ```
#[derive(Debug, Clone)]
pub struct Bookmark {
    id: Uuid,
    user_id: Uuid,
    title: String,
    description: Option<String>,
    link: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Partial update of a bookmark; `None` leaves a field unchanged
#[derive(Debug, Clone, Default)]
pub struct BookmarkChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
}

impl Bookmark {
    /// Creates a new bookmark owned by `user_id`
    ///
    /// # Returns
    /// * `Ok(Bookmark)` - New bookmark with a fresh id
    /// * `Err(DomainError)` - If title or link is blank
    pub fn new(
        user_id: Uuid,
        title: String,
        description: Option<String>,
        link: String,
    ) -> Result<Self, DomainError> {
        ensure_not_blank("title", &title)?;
        ensure_not_blank("link", &link)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            title,
            description,
            link,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitutes a bookmark from persistence (no validation)
    pub fn from_persistence(
        id: Uuid,
        user_id: Uuid,
        title: String,
        description: Option<String>,
        link: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            title,
            description,
            link,
            created_at,
            updated_at,
        }
    }

    /// Applies a partial update
    ///
    /// Nothing is modified if any supplied value breaks an invariant.
    pub fn apply(&mut self, changes: BookmarkChanges) -> Result<(), DomainError> {
        if let Some(title) = &changes.title {
            ensure_not_blank("title", title)?;
        }
        if let Some(link) = &changes.link {
            ensure_not_blank("link", link)?;
        }

        let mut touched = false;
        if let Some(title) = changes.title {
            self.title = title;
            touched = true;
        }
        if let Some(description) = changes.description {
            self.description = Some(description);
            touched = true;
        }
        if let Some(link) = changes.link {
            self.link = link;
            touched = true;
        }

        if touched {
            self.updated_at = Utc::now();
        }
        Ok(())
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Whether `user_id` owns this bookmark
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }
}

fn ensure_not_blank(field: &'static str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::EmptyField(field));
    }
    Ok(())
}
