//! User value referenced by task ownership and contribution.

use super::{TaskDomainError, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An actor that can own or contribute to tasks.
///
/// Deserialization goes through [`User::new`], so decoded usernames are
/// trimmed and never blank.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "UserPayload")]
pub struct User {
    id: UserId,
    username: String,
}

/// Unvalidated wire shape of a [`User`].
#[derive(Deserialize)]
struct UserPayload {
    id: UserId,
    username: String,
}

impl TryFrom<UserPayload> for User {
    type Error = TaskDomainError;

    fn try_from(payload: UserPayload) -> Result<Self, Self::Error> {
        Self::new(payload.id, payload.username)
    }
}

impl User {
    /// Creates a user with a trimmed, non-empty username.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyUsername`] if the username is blank.
    pub fn new(id: UserId, username: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = username.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(TaskDomainError::EmptyUsername);
        }

        Ok(Self {
            id,
            username: normalized.to_owned(),
        })
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.username, self.id)
    }
}
