//! Validation service implementation.
//!
//! Provides the default implementation of the `TaskValidator` port,
//! combining individual field rules into one report.

use crate::task::{
    domain::Task,
    error::TaskValidationError,
    ports::{TaskValidationConfig, TaskValidationResult, TaskValidator},
    validation::rules,
};

/// Default implementation of the task validator.
///
/// Checks the identifier, content, and owner rules in that order and
/// reports every failure together. Activation and contributors are never
/// inspected.
///
/// # Examples
///
/// ```
/// use taskhub::task::domain::{Task, TaskId, User, UserId};
/// use taskhub::task::ports::TaskValidator;
/// use taskhub::task::validation::DefaultTaskValidator;
///
/// let mut task = Task::new(TaskId::new(1).expect("valid id"), "Ship");
/// let validator = DefaultTaskValidator::new();
/// assert!(validator.validate(&task).is_err());
///
/// task.set_owner(User::new(UserId::new(), "alice").expect("valid user"));
/// assert!(validator.validate(&task).is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DefaultTaskValidator {
    config: TaskValidationConfig,
}

impl DefaultTaskValidator {
    /// Creates a new validator with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new validator with custom configuration.
    #[must_use]
    pub const fn with_config(config: TaskValidationConfig) -> Self {
        Self { config }
    }

    /// Returns the current validation configuration.
    #[must_use]
    pub const fn config(&self) -> &TaskValidationConfig {
        &self.config
    }
}

impl TaskValidator for DefaultTaskValidator {
    fn validate(&self, task: &Task) -> TaskValidationResult<()> {
        let violations = [
            rules::validate_id(task),
            rules::validate_content(task, &self.config),
            rules::validate_owner(task),
        ]
        .into_iter()
        .flatten()
        .collect();

        TaskValidationError::from_violations(violations).map_or(Ok(()), Err)
    }
}

/// Validates a task with the default rules.
///
/// # Errors
///
/// Returns [`TaskValidationError`] listing each failed field constraint.
pub fn validate_task(task: &Task) -> TaskValidationResult<()> {
    DefaultTaskValidator::new().validate(task)
}
