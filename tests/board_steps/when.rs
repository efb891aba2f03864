//! When steps for task board BDD scenarios.

use super::world::{BoardWorld, member};
use rstest_bdd_macros::when;
use taskboard::board::domain::{ContainerId, TaskStatus};

#[when(r#"the team "{names}" is created"#)]
fn team_is_created(world: &mut BoardWorld, names: String) {
    let result = world.board.create_team_from_input(&names);
    world.record(result);
}

#[when("the task is dragged onto member {index:u64}")]
fn task_is_dragged(world: &mut BoardWorld, index: u64) -> Result<(), eyre::Report> {
    let task_id = world.task_id()?;
    let target = ContainerId::Member(member(index)?);
    let began = world.board.begin_drag(task_id);
    if let Some(payload) = world.record(began) {
        let dropped = world.board.drop(payload, target);
        world.record(dropped);
    }
    Ok(())
}

#[when("a drag of the task starts")]
fn drag_starts(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let task_id = world.task_id()?;
    let began = world.board.begin_drag(task_id);
    world.pending_drag = world.record(began);
    Ok(())
}

#[when("the dragged task is dropped onto member {index:u64}")]
fn dragged_task_dropped(world: &mut BoardWorld, index: u64) -> Result<(), eyre::Report> {
    let payload = world
        .pending_drag
        .take()
        .ok_or_else(|| eyre::eyre!("missing drag payload in scenario world"))?;
    let dropped = world
        .board
        .drop(payload, ContainerId::Member(member(index)?));
    world.record(dropped);
    Ok(())
}

#[when(r#"the task status is set to "{status}""#)]
fn status_is_set(world: &mut BoardWorld, status: String) -> Result<(), eyre::Report> {
    let task_id = world.task_id()?;
    let parsed = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;
    let result = world.board.set_status(task_id, parsed);
    world.record(result);
    Ok(())
}

#[when("the task is deleted")]
fn task_is_deleted(world: &mut BoardWorld) -> Result<(), eyre::Report> {
    let task_id = world.task_id()?;
    world.board.delete_task(task_id);
    Ok(())
}
