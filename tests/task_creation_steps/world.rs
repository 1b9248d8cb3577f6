//! Shared world state for task creation BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use rstest::fixture;
use taskhub::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{NewTask, Task, TaskDomainError, User, UserId},
    mapping::FieldCopyMapper,
    services::{TaskLifecycleError, TaskLifecycleService},
    validation::DefaultTaskValidator,
};

/// Service type used by the BDD world.
pub type TestTaskService =
    TaskLifecycleService<InMemoryTaskRepository, FieldCopyMapper, DefaultTaskValidator>;

/// Scenario world for task creation behaviour tests.
pub struct TaskWorld {
    pub service: TestTaskService,
    pub users: HashMap<String, User>,
    pub pending_task: Option<NewTask>,
    pub last_created_task: Option<Task>,
    pub last_create_result: Option<Result<Task, TaskLifecycleError>>,
}

impl TaskWorld {
    /// Creates a world with empty pending scenario state.
    #[must_use]
    pub fn new() -> Self {
        let service = TaskLifecycleService::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::new(FieldCopyMapper),
            Arc::new(DefaultTaskValidator::new()),
        );
        Self {
            service,
            users: HashMap::new(),
            pending_task: None,
            last_created_task: None,
            last_create_result: None,
        }
    }

    /// Returns the user registered under `name`, creating it on first use.
    pub fn user(&mut self, name: &str) -> Result<User, TaskDomainError> {
        if let Some(existing) = self.users.get(name) {
            return Ok(existing.clone());
        }
        let created = User::new(UserId::new(), name)?;
        self.users.insert(name.to_owned(), created.clone());
        Ok(created)
    }
}

impl Default for TaskWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskWorld {
    TaskWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
