//! Given steps for task board BDD scenarios.

use super::world::{BoardWorld, member};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::board::domain::ContainerId;

#[given("an empty task board")]
fn empty_board(world: &mut BoardWorld) {
    world.current_task = None;
}

#[given(r#"a task board with team "{names}""#)]
fn board_with_team(world: &mut BoardWorld, names: String) -> Result<(), eyre::Report> {
    world
        .board
        .create_team_from_input(&names)
        .wrap_err("create team for scenario")?;
    Ok(())
}

#[given(r#"a task "{text}" in the pool"#)]
fn task_in_pool(world: &mut BoardWorld, text: String) -> Result<(), eyre::Report> {
    let task = world
        .board
        .add_task(&text)
        .wrap_err("add task for scenario")?;
    world.current_task = Some(task.id());
    Ok(())
}

#[given("the task is dragged onto member {index:u64}")]
fn task_already_dragged(world: &mut BoardWorld, index: u64) -> Result<(), eyre::Report> {
    let task_id = world.task_id()?;
    let payload = world
        .board
        .begin_drag(task_id)
        .wrap_err("begin drag in scenario setup")?;
    world
        .board
        .drop(payload, ContainerId::Member(member(index)?))
        .wrap_err("drop in scenario setup")?;
    Ok(())
}
