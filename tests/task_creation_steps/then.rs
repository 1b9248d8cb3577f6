//! Then steps for task creation BDD scenarios.

use super::world::{TaskWorld, run_async};
use rstest_bdd_macros::then;
use taskhub::task::{
    domain::Task,
    error::{TaskField, ViolationKind},
    services::TaskLifecycleError,
};

fn created_task(world: &TaskWorld) -> Result<&Task, eyre::Report> {
    let create_result = world
        .last_create_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing create result in scenario world"))?;
    create_result
        .as_ref()
        .map_err(|err| eyre::eyre!("unexpected task creation failure: {err}"))
}

#[then("the task is stored with an assigned identifier")]
fn task_stored_with_identifier(world: &TaskWorld) -> Result<(), eyre::Report> {
    let task = created_task(world)?;
    let id = task
        .id()
        .ok_or_else(|| eyre::eyre!("created task has no identifier"))?;
    let stored = run_async(world.service.find_by_id(id))
        .map_err(|err| eyre::eyre!("lookup failed: {err}"))?;

    if stored.as_ref() != Some(task) {
        return Err(eyre::eyre!("stored task does not match created task"));
    }
    Ok(())
}

#[then("the task copies the content and owner of the new task")]
fn task_copies_new_task_fields(world: &TaskWorld) -> Result<(), eyre::Report> {
    let task = created_task(world)?;
    let new_task = world
        .pending_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing pending new task in scenario world"))?;

    if task.content() != new_task.content() {
        return Err(eyre::eyre!(
            "expected content {:?}, found {:?}",
            new_task.content(),
            task.content()
        ));
    }
    if task.owner() != Some(new_task.owner()) {
        return Err(eyre::eyre!("task owner does not match new task owner"));
    }
    Ok(())
}

#[then("the task is inactive with no contributors")]
fn task_inactive_without_contributors(world: &TaskWorld) -> Result<(), eyre::Report> {
    let task = created_task(world)?;
    if task.is_active() {
        return Err(eyre::eyre!("expected a new task to be inactive"));
    }
    if task.contributors().is_some() {
        return Err(eyre::eyre!("expected a new task to have no contributor set"));
    }
    Ok(())
}

#[then("task creation fails because the content is blank")]
fn creation_fails_on_blank_content(world: &TaskWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_create_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing create result in scenario world"))?;

    let Err(TaskLifecycleError::Validation(err)) = result else {
        return Err(eyre::eyre!("expected validation failure, got {result:?}"));
    };
    if !err.has_violation(TaskField::Content, ViolationKind::Blank) {
        return Err(eyre::eyre!("expected blank content violation, got {err}"));
    }
    Ok(())
}

#[then(r#"no task is stored for "{owner}""#)]
fn no_task_stored_for(world: &TaskWorld, owner: String) -> Result<(), eyre::Report> {
    let user = world
        .users
        .get(&owner)
        .ok_or_else(|| eyre::eyre!("unknown user {owner} in scenario world"))?;
    let owned = run_async(world.service.find_by_owner(user.id()))
        .map_err(|err| eyre::eyre!("lookup failed: {err}"))?;

    if !owned.is_empty() {
        return Err(eyre::eyre!("expected no stored tasks, found {}", owned.len()));
    }
    Ok(())
}

#[then("the task has {count:usize} contributors")]
fn task_has_contributors(world: &TaskWorld, count: usize) -> Result<(), eyre::Report> {
    let task = world
        .last_created_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing stored task in scenario world"))?;
    let actual = task.contributors().map_or(0, std::collections::BTreeSet::len);

    if actual != count {
        return Err(eyre::eyre!("expected {count} contributors, found {actual}"));
    }
    Ok(())
}
