//! Error types for task mapping and validation.
//!
//! Uses `thiserror` for typed variants that callers can inspect.

use std::fmt;
use thiserror::Error;

/// Raised when an inbound payload cannot be mapped onto a task.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("new task payload is incompatible with the task entity: {0}")]
pub struct MappingError(pub String);

/// Task field subject to validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskField {
    /// The persistence identifier.
    Id,
    /// The task description.
    Content,
    /// The accountable user.
    Owner,
}

impl TaskField {
    /// Returns the field name as used in payloads and storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Content => "content",
            Self::Owner => "owner",
        }
    }
}

impl fmt::Display for TaskField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of constraint a field failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    /// The field has no value.
    Missing,
    /// The field holds only whitespace.
    Blank,
    /// The field exceeds the configured length.
    TooLong {
        /// Maximum allowed length in characters.
        limit: usize,
        /// Actual length in characters.
        actual: usize,
    },
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("must be present"),
            Self::Blank => f.write_str("must not be blank"),
            Self::TooLong { limit, actual } => {
                write!(f, "has {actual} characters, exceeds limit of {limit}")
            }
        }
    }
}

/// A single failed constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldViolation {
    /// The offending field.
    pub field: TaskField,
    /// The failed constraint.
    pub kind: ViolationKind,
}

impl FieldViolation {
    /// Creates a violation record.
    #[must_use]
    pub const fn new(field: TaskField, kind: ViolationKind) -> Self {
        Self { field, kind }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.kind)
    }
}

/// Raised when a task fails one or more field constraints.
///
/// Always holds at least one violation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("task is invalid: {}", format_violations(.violations))]
pub struct TaskValidationError {
    violations: Vec<FieldViolation>,
}

fn format_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl TaskValidationError {
    /// Builds an error from collected violations.
    ///
    /// Returns `None` when nothing was violated.
    #[must_use]
    pub fn from_violations(violations: Vec<FieldViolation>) -> Option<Self> {
        (!violations.is_empty()).then_some(Self { violations })
    }

    /// Returns every violation in rule order.
    #[must_use]
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Returns `true` if the given field failed with the given kind.
    #[must_use]
    pub fn has_violation(&self, field: TaskField, kind: ViolationKind) -> bool {
        self.violations
            .iter()
            .any(|violation| violation.field == field && violation.kind == kind)
    }

    /// Returns `true` if the given field failed any constraint.
    #[must_use]
    pub fn violates(&self, field: TaskField) -> bool {
        self.violations
            .iter()
            .any(|violation| violation.field == field)
    }
}
