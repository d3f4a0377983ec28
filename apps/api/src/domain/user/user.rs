use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::value_objects::Email;

/// A registered account
///
/// The password is only ever held as an Argon2 PHC hash string.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: Email,
    pub password_hash: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update of a user's profile; `None` leaves a field unchanged
#[derive(Debug, Clone, Default)]
pub struct ProfileChanges {
    pub email: Option<Email>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl ProfileChanges {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.first_name.is_none() && self.last_name.is_none()
    }
}

impl User {
    /// Creates a new user with a fresh id and no profile names
    ///
    /// # Example
    /// ```
    /// use bookmarks_api::domain::user::{Email, User};
    ///
    /// let email = Email::new("jane@example.com").unwrap();
    /// let user = User::new(email, "$argon2id$...".to_string());
    /// assert!(user.first_name.is_none());
    /// ```
    pub fn new(email: Email, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            first_name: None,
            last_name: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies a profile update and bumps `updated_at` when anything was supplied
    pub fn apply(&mut self, changes: ProfileChanges) {
        if changes.is_empty() {
            return;
        }

        if let Some(email) = changes.email {
            self.email = email;
        }
        if let Some(first_name) = changes.first_name {
            self.first_name = Some(first_name);
        }
        if let Some(last_name) = changes.last_name {
            self.last_name = Some(last_name);
        }

        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User::new(Email::new("jane@example.com").unwrap(), "hash".to_string())
    }

    #[test]
    fn new_user_has_matching_timestamps() {
        let user = user();
        assert_eq!(user.created_at, user.updated_at);
        assert!(user.last_name.is_none());
    }

    #[test]
    fn apply_sets_only_supplied_fields() {
        let mut user = user();
        user.apply(ProfileChanges {
            first_name: Some("Jane".to_string()),
            ..Default::default()
        });

        assert_eq!(user.first_name.as_deref(), Some("Jane"));
        assert!(user.last_name.is_none());
        assert_eq!(user.email.as_str(), "jane@example.com");
        assert!(user.updated_at >= user.created_at);
    }

    #[test]
    fn apply_can_change_email() {
        let mut user = user();
        user.apply(ProfileChanges {
            email: Some(Email::new("new@example.com").unwrap()),
            ..Default::default()
        });

        assert_eq!(user.email.as_str(), "new@example.com");
    }

    #[test]
    fn empty_changes_leave_user_untouched() {
        let mut user = user();
        let before = user.updated_at;
        user.apply(ProfileChanges::default());
        assert_eq!(user.updated_at, before);
    }
}
