//! Default mapper from [`NewTask`] input to [`Task`] entities.

use crate::task::{
    domain::{NewTask, Task},
    ports::TaskMapper,
};
use tracing::debug;

/// Mapper that copies the fields shared by [`NewTask`] and [`Task`].
///
/// `content` and `owner` are copied verbatim. The identifier stays unset
/// for persistence to assign, the task starts inactive, and no contributor
/// set is recorded.
///
/// # Examples
///
/// ```
/// use taskhub::task::domain::{NewTask, User, UserId};
/// use taskhub::task::mapping::FieldCopyMapper;
/// use taskhub::task::ports::TaskMapper;
///
/// let owner = User::new(UserId::new(), "alice").expect("valid user");
/// let new_task = NewTask::new("Write report", owner.clone());
///
/// let task = FieldCopyMapper.map_to_entity(&new_task);
/// assert_eq!(task.content(), "Write report");
/// assert_eq!(task.owner(), Some(&owner));
/// assert!(task.id().is_none());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldCopyMapper;

impl TaskMapper for FieldCopyMapper {
    fn map_to_entity(&self, new_task: &NewTask) -> Task {
        debug!(owner = %new_task.owner().id(), "mapping new task to entity");
        Task::from(new_task)
    }
}
