//! Error types for task domain value construction.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task identifier is outside the persistable range.
    #[error("invalid task identifier {0}, expected a positive integer")]
    InvalidTaskId(u64),

    /// The username is empty after trimming.
    #[error("username must not be empty")]
    EmptyUsername,
}
