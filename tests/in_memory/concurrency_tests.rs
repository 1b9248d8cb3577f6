//! Concurrent task creation against the in-memory repository.

use std::collections::BTreeSet;
use std::sync::Arc;

use taskhub::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{NewTask, User, UserId},
    mapping::FieldCopyMapper,
    services::TaskLifecycleService,
    validation::DefaultTaskValidator,
};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creations_receive_distinct_identifiers() -> Result<(), eyre::Report> {
    let repository = InMemoryTaskRepository::new();
    let service = Arc::new(TaskLifecycleService::new(
        Arc::new(repository.clone()),
        Arc::new(FieldCopyMapper),
        Arc::new(DefaultTaskValidator::new()),
    ));
    let owner = User::new(UserId::new(), "owner")?;

    let handles: Vec<_> = (0..16)
        .map(|index| {
            let task_service = Arc::clone(&service);
            let new_task = NewTask::new(format!("task {index}"), owner.clone());
            tokio::spawn(async move { task_service.create(&new_task).await })
        })
        .collect();

    let mut ids = BTreeSet::new();
    for handle in handles {
        let task = handle.await??;
        let id = task
            .id()
            .ok_or_else(|| eyre::eyre!("created task has no identifier"))?;
        ids.insert(id);
    }

    eyre::ensure!(ids.len() == 16, "expected 16 distinct ids, got {}", ids.len());
    eyre::ensure!(repository.len()? == 16, "expected 16 stored tasks");
    Ok(())
}
