//! Inbound representation used to create tasks.

use super::User;
use serde::{Deserialize, Serialize};

/// Request-side shape of a task that has not been persisted yet.
///
/// Carries only what a caller can know before creation: the task content
/// and its owner. Identity, activation, and contributors are set later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    content: String,
    owner: User,
}

impl NewTask {
    /// Creates a new task input.
    #[must_use]
    pub fn new(content: impl Into<String>, owner: User) -> Self {
        Self {
            content: content.into(),
            owner,
        }
    }

    /// Returns the task content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the requested owner.
    #[must_use]
    pub const fn owner(&self) -> &User {
        &self.owner
    }

    /// Consumes the input, returning its content and owner.
    #[must_use]
    pub fn into_parts(self) -> (String, User) {
        (self.content, self.owner)
    }
}
