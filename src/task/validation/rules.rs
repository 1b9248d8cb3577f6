//! Individual validation rule implementations.
//!
//! Each rule inspects one field and returns the violation it finds, if any.

use crate::task::{
    domain::Task,
    error::{FieldViolation, TaskField, ViolationKind},
    ports::TaskValidationConfig,
};

/// Checks that the task has an identifier.
#[must_use]
pub const fn validate_id(task: &Task) -> Option<FieldViolation> {
    if task.id().is_none() {
        return Some(FieldViolation::new(TaskField::Id, ViolationKind::Missing));
    }
    None
}

/// Checks that the content holds a non-whitespace character and respects
/// the configured length limit.
#[must_use]
pub fn validate_content(task: &Task, config: &TaskValidationConfig) -> Option<FieldViolation> {
    let content = task.content();
    if content.trim().is_empty() {
        return Some(FieldViolation::new(TaskField::Content, ViolationKind::Blank));
    }

    let limit = config.max_content_length?;
    let actual = content.chars().count();
    (actual > limit).then_some(FieldViolation::new(
        TaskField::Content,
        ViolationKind::TooLong { limit, actual },
    ))
}

/// Checks that the task has an owner.
#[must_use]
pub const fn validate_owner(task: &Task) -> Option<FieldViolation> {
    if task.owner().is_none() {
        return Some(FieldViolation::new(TaskField::Owner, ViolationKind::Missing));
    }
    None
}
