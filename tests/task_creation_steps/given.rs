//! Given steps for task creation BDD scenarios.

use super::world::{TaskWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskhub::task::domain::NewTask;

#[given(r#"a new task "{content}" owned by "{owner}""#)]
fn new_task_owned_by(
    world: &mut TaskWorld,
    content: String,
    owner: String,
) -> Result<(), eyre::Report> {
    let owner_user = world.user(&owner).wrap_err("register task owner")?;
    world.pending_task = Some(NewTask::new(content, owner_user));
    Ok(())
}

#[given(r#"a new task with blank content owned by "{owner}""#)]
fn blank_task_owned_by(world: &mut TaskWorld, owner: String) -> Result<(), eyre::Report> {
    let owner_user = world.user(&owner).wrap_err("register task owner")?;
    world.pending_task = Some(NewTask::new(" \t ", owner_user));
    Ok(())
}

#[given(r#"a stored task "{content}" owned by "{owner}""#)]
fn stored_task_owned_by(
    world: &mut TaskWorld,
    content: String,
    owner: String,
) -> Result<(), eyre::Report> {
    let owner_user = world.user(&owner).wrap_err("register task owner")?;
    let created = run_async(world.service.create(&NewTask::new(content, owner_user)))
        .wrap_err("create task for contributor scenario")?;
    world.last_created_task = Some(created);
    Ok(())
}
