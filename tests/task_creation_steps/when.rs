//! When steps for task creation BDD scenarios.

use super::world::{TaskWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;

#[when("the new task is submitted")]
fn submit_new_task(world: &mut TaskWorld) -> Result<(), eyre::Report> {
    let new_task = world
        .pending_task
        .clone()
        .ok_or_else(|| eyre::eyre!("missing pending new task in scenario world"))?;

    let result = run_async(world.service.create(&new_task));
    if let Ok(task) = &result {
        world.last_created_task = Some(task.clone());
    }
    world.last_create_result = Some(result);
    Ok(())
}

#[when(r#""{name}" is added as a contributor"#)]
fn add_contributor(world: &mut TaskWorld, name: String) -> Result<(), eyre::Report> {
    let contributor = world.user(&name).wrap_err("register contributor")?;
    let id = world
        .last_created_task
        .as_ref()
        .and_then(taskhub::task::domain::Task::id)
        .ok_or_else(|| eyre::eyre!("missing stored task in scenario world"))?;

    let updated = run_async(world.service.add_contributor(id, contributor))
        .wrap_err("add contributor")?;
    world.last_created_task = Some(updated);
    Ok(())
}
