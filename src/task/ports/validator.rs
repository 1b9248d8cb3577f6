//! Validator port for task field constraints.

use crate::task::{domain::Task, error::TaskValidationError};

/// Result type for validation operations.
pub type TaskValidationResult<T> = Result<T, TaskValidationError>;

/// Port for validating tasks before they are persisted.
///
/// Implementations collect every violation before returning rather than
/// stopping at the first one, and hold no mutable state.
pub trait TaskValidator: Send + Sync {
    /// Validates a task against all rules.
    ///
    /// # Errors
    ///
    /// Returns [`TaskValidationError`] listing each failed field constraint.
    fn validate(&self, task: &Task) -> TaskValidationResult<()>;
}

/// Configuration for task validation rules.
///
/// # Examples
///
/// ```
/// use taskhub::task::ports::TaskValidationConfig;
///
/// let config = TaskValidationConfig::default();
/// assert_eq!(config.max_content_length, None);
///
/// let strict = TaskValidationConfig::strict();
/// assert_eq!(strict.max_content_length, Some(10_000));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskValidationConfig {
    /// Maximum content length in characters, unbounded when `None`.
    pub max_content_length: Option<usize>,
}

impl TaskValidationConfig {
    /// Creates a configuration with a bounded content length.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            max_content_length: Some(10_000),
        }
    }

    /// Sets the maximum content length in characters.
    #[must_use]
    pub const fn with_max_content_length(mut self, limit: usize) -> Self {
        self.max_content_length = Some(limit);
        self
    }
}
