//! Task entity and its ownership relations.

use super::{NewTask, TaskId, User, UserId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A unit of work owned by a user and optionally shared with contributors.
///
/// Construction never enforces the persistence invariants (identifier,
/// non-blank content, owner). A partially built task is a normal value that
/// callers complete and then check with a
/// [`TaskValidator`](crate::task::ports::TaskValidator).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: Option<TaskId>,
    content: String,
    is_active: bool,
    owner: Option<User>,
    contributors: Option<BTreeSet<User>>,
}

/// Parameter object carrying every task field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskParts {
    /// Task identifier, if assigned.
    pub id: Option<TaskId>,
    /// Task description.
    pub content: String,
    /// Whether the task is currently active.
    pub is_active: bool,
    /// Accountable user, if set.
    pub owner: Option<User>,
    /// Collaborating users, if any were recorded.
    pub contributors: Option<BTreeSet<User>>,
}

impl Task {
    /// Creates a task with an identifier and content only.
    ///
    /// The owner is left unset, so the result fails validation until
    /// [`Task::set_owner`] is called.
    #[must_use]
    pub fn new(id: TaskId, content: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            content: content.into(),
            ..Self::default()
        }
    }

    /// Creates a task from every field.
    #[must_use]
    pub fn from_parts(parts: TaskParts) -> Self {
        Self {
            id: parts.id,
            content: parts.content,
            is_active: parts.is_active,
            owner: parts.owner,
            contributors: parts.contributors,
        }
    }

    /// Decomposes the task into its fields.
    #[must_use]
    pub fn into_parts(self) -> TaskParts {
        TaskParts {
            id: self.id,
            content: self.content,
            is_active: self.is_active,
            owner: self.owner,
            contributors: self.contributors,
        }
    }

    /// Returns the task identifier, if assigned.
    #[must_use]
    pub const fn id(&self) -> Option<TaskId> {
        self.id
    }

    /// Returns the task content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns whether the task is active.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
    }

    /// Returns the owner, if set.
    #[must_use]
    pub const fn owner(&self) -> Option<&User> {
        self.owner.as_ref()
    }

    /// Returns the contributor set, if one was recorded.
    #[must_use]
    pub const fn contributors(&self) -> Option<&BTreeSet<User>> {
        self.contributors.as_ref()
    }

    /// Returns `true` if the given user is the owner.
    #[must_use]
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.owner.as_ref().is_some_and(|owner| owner.id() == user_id)
    }

    /// Assigns the persistence identifier.
    pub const fn assign_id(&mut self, id: TaskId) {
        self.id = Some(id);
    }

    /// Replaces the task content.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Sets the activation flag.
    pub const fn set_active(&mut self, is_active: bool) {
        self.is_active = is_active;
    }

    /// Sets the owner.
    pub fn set_owner(&mut self, owner: User) {
        self.owner = Some(owner);
    }

    /// Replaces the contributor set.
    pub fn set_contributors(&mut self, contributors: Option<BTreeSet<User>>) {
        self.contributors = contributors;
    }

    /// Adds a contributor, creating the set if absent.
    ///
    /// Returns `false` when the user was already a contributor.
    pub fn add_contributor(&mut self, user: User) -> bool {
        self.contributors.get_or_insert_with(BTreeSet::new).insert(user)
    }

    /// Removes every contributor with the given identifier.
    ///
    /// Returns `true` if at least one contributor was removed.
    pub fn remove_contributor(&mut self, user_id: UserId) -> bool {
        let Some(contributors) = self.contributors.as_mut() else {
            return false;
        };
        let before = contributors.len();
        contributors.retain(|user| user.id() != user_id);
        contributors.len() != before
    }
}

impl From<NewTask> for Task {
    fn from(new_task: NewTask) -> Self {
        let (content, owner) = new_task.into_parts();
        Self {
            id: None,
            content,
            is_active: false,
            owner: Some(owner),
            contributors: None,
        }
    }
}

impl From<&NewTask> for Task {
    fn from(new_task: &NewTask) -> Self {
        Self::from(new_task.clone())
    }
}
