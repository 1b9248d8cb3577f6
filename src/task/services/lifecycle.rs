//! Service layer for task creation, lookup, and maintenance.

use crate::task::{
    domain::{NewTask, Task, TaskId, User, UserId},
    error::{MappingError, TaskValidationError},
    ports::{TaskMapper, TaskRepository, TaskRepositoryError, TaskValidator},
};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// The inbound payload did not match the task shape.
    #[error(transparent)]
    Mapping(#[from] MappingError),
    /// The task failed field validation.
    #[error(transparent)]
    Validation(#[from] TaskValidationError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
///
/// Collaborators are passed in at construction; the service keeps no state
/// of its own.
#[derive(Clone)]
pub struct TaskLifecycleService<R, M, V>
where
    R: TaskRepository,
    M: TaskMapper,
    V: TaskValidator,
{
    repository: Arc<R>,
    mapper: Arc<M>,
    validator: Arc<V>,
}

impl<R, M, V> TaskLifecycleService<R, M, V>
where
    R: TaskRepository,
    M: TaskMapper,
    V: TaskValidator,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, mapper: Arc<M>, validator: Arc<V>) -> Self {
        Self {
            repository,
            mapper,
            validator,
        }
    }

    /// Creates and stores a task from new task input.
    ///
    /// The task is mapped, given a fresh identifier, validated, and only
    /// then stored. A rejected task consumes its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Validation`] when the mapped task breaks
    /// a field constraint, or [`TaskLifecycleError::Repository`] when
    /// persistence fails.
    pub async fn create(&self, new_task: &NewTask) -> TaskLifecycleResult<Task> {
        let task = self.mapper.map_to_entity(new_task);
        self.persist_new(task).await
    }

    /// Creates and stores a task from a loosely typed payload.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Mapping`] when the payload does not
    /// match the new task shape, otherwise as [`Self::create`].
    pub async fn create_from_payload(&self, payload: Value) -> TaskLifecycleResult<Task> {
        let task = self.mapper.map_payload(payload)?;
        self.persist_new(task).await
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the lookup fails.
    pub async fn find_by_id(&self, id: TaskId) -> TaskLifecycleResult<Option<Task>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Retrieves every task owned by the given user.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the lookup fails.
    pub async fn find_by_owner(&self, owner: UserId) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.repository.find_by_owner(owner).await?)
    }

    /// Validates and stores changes to an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Validation`] when the task breaks a
    /// field constraint, or [`TaskLifecycleError::Repository`] when the task
    /// does not exist or persistence fails.
    pub async fn update(&self, task: &Task) -> TaskLifecycleResult<()> {
        self.validate(task)?;
        self.repository.update(task).await?;
        if let Some(id) = task.id() {
            info!(task_id = %id, "task updated");
        }
        Ok(())
    }

    /// Activates or deactivates a task.
    ///
    /// The stored task is loaded and written back whole with no version
    /// check, so concurrent changes to the same task can overwrite each
    /// other. Callers that share a task between threads must serialise these
    /// calls themselves.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] (wrapped) when the task does
    /// not exist, or any error from [`Self::update`].
    pub async fn set_active(&self, id: TaskId, is_active: bool) -> TaskLifecycleResult<Task> {
        self.modify(id, |task| task.set_active(is_active)).await
    }

    /// Adds a contributor to a task.
    ///
    /// Adding an existing contributor leaves the set unchanged.
    ///
    /// The stored task is loaded and written back whole with no version
    /// check, so concurrent changes to the same task can overwrite each
    /// other. Callers that share a task between threads must serialise these
    /// calls themselves.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] (wrapped) when the task does
    /// not exist, or any error from [`Self::update`].
    pub async fn add_contributor(&self, id: TaskId, user: User) -> TaskLifecycleResult<Task> {
        self.modify(id, |task| {
            task.add_contributor(user);
        })
        .await
    }

    /// Removes a contributor from a task.
    ///
    /// The stored task is loaded and written back whole with no version
    /// check, so concurrent changes to the same task can overwrite each
    /// other. Callers that share a task between threads must serialise these
    /// calls themselves.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] (wrapped) when the task does
    /// not exist, or any error from [`Self::update`].
    pub async fn remove_contributor(
        &self,
        id: TaskId,
        user_id: UserId,
    ) -> TaskLifecycleResult<Task> {
        self.modify(id, |task| {
            task.remove_contributor(user_id);
        })
        .await
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the task does not
    /// exist or persistence fails.
    pub async fn delete(&self, id: TaskId) -> TaskLifecycleResult<()> {
        self.repository.delete(id).await?;
        info!(task_id = %id, "task deleted");
        Ok(())
    }

    async fn persist_new(&self, mut task: Task) -> TaskLifecycleResult<Task> {
        let id = self.repository.next_id().await?;
        task.assign_id(id);
        self.validate(&task)?;
        self.repository.store(&task).await?;
        info!(task_id = %id, "task created");
        Ok(task)
    }

    async fn modify(
        &self,
        id: TaskId,
        change: impl FnOnce(&mut Task) + Send,
    ) -> TaskLifecycleResult<Task> {
        let mut task = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TaskRepositoryError::NotFound(id))?;
        change(&mut task);
        self.update(&task).await?;
        Ok(task)
    }

    fn validate(&self, task: &Task) -> Result<(), TaskValidationError> {
        self.validator.validate(task).inspect_err(|err| {
            warn!(task_id = ?task.id(), error = %err, "task rejected by validation");
        })
    }
}
