//! User entity.
//!
//! # Invariants
//! - `username` and `email` are non-empty before persistence.
//! - Lengths fit the `users` VARCHAR columns.

use super::{require_text, EntityId, ValidationError, UNASSIGNED_ID};
use serde::{Deserialize, Serialize};

pub const USERNAME_MAX_CHARS: usize = 50;
pub const EMAIL_MAX_CHARS: usize = 100;

/// One row of `users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: EntityId,
    pub username: String,
    pub email: String,
}

impl User {
    /// Creates an unpersisted user; storage assigns the id on insert.
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self::with_id(UNASSIGNED_ID, username, email)
    }

    pub fn with_id(id: EntityId, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
        }
    }

    /// Validates required fields against the `users` column constraints.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("username", &self.username, USERNAME_MAX_CHARS)?;
        require_text("email", &self.email, EMAIL_MAX_CHARS)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::User;
    use crate::model::{ValidationError, UNASSIGNED_ID};

    #[test]
    fn new_user_is_unassigned() {
        let user = User::new("testuser1", "test1@example.com");
        assert_eq!(user.id, UNASSIGNED_ID);
        assert!(user.validate().is_ok());
    }

    #[test]
    fn empty_username_is_reported_before_email() {
        let user = User::new("", "");
        assert_eq!(
            user.validate(),
            Err(ValidationError::EmptyField("username"))
        );
    }

    #[test]
    fn empty_email_is_rejected() {
        let user = User::new("alice", "");
        assert_eq!(user.validate(), Err(ValidationError::EmptyField("email")));
    }

    #[test]
    fn username_longer_than_column_is_rejected() {
        let user = User::new("u".repeat(51), "a@example.com");
        assert!(matches!(
            user.validate(),
            Err(ValidationError::FieldTooLong {
                field: "username",
                max_chars: 50
            })
        ));
    }
}
