//! Then steps for task board BDD scenarios.

use super::world::{BoardWorld, member};
use rstest_bdd_macros::then;
use taskboard::board::{
    domain::{BoardDomainError, ContainerCount, ContainerId},
    services::BoardError,
};

fn expect_count(
    world: &BoardWorld,
    container: ContainerId,
    count: u64,
    shown: bool,
) -> Result<(), eyre::Report> {
    let expected = ContainerCount {
        count: usize::try_from(count)?,
        placeholder_visible: shown,
    };
    let displayed = world
        .board
        .counts()
        .container(container)
        .ok_or_else(|| eyre::eyre!("no count for {container}"))?;
    if displayed != expected {
        return Err(eyre::eyre!(
            "expected {expected:?} for {container}, found {displayed:?}"
        ));
    }
    Ok(())
}

#[then("the team has {count:u64} members")]
fn team_has_members(world: &BoardWorld, count: u64) -> Result<(), eyre::Report> {
    let actual = world.board.members().len();
    if actual != usize::try_from(count)? {
        return Err(eyre::eyre!("expected {count} members, found {actual}"));
    }
    Ok(())
}

#[then(r#"member {index:u64} is named "{name}""#)]
fn member_is_named(world: &BoardWorld, index: u64, name: String) -> Result<(), eyre::Report> {
    let id = member(index)?;
    let found = world
        .board
        .registry()
        .find(id)
        .ok_or_else(|| eyre::eyre!("missing member {id}"))?;
    if found.name().as_str() != name {
        return Err(eyre::eyre!("expected {name}, found {}", found.name()));
    }
    Ok(())
}

#[then("member {index:u64} has {count:u64} tasks with the placeholder shown")]
fn member_count_shown(world: &BoardWorld, index: u64, count: u64) -> Result<(), eyre::Report> {
    expect_count(world, ContainerId::Member(member(index)?), count, true)
}

#[then("member {index:u64} has {count:u64} tasks with the placeholder hidden")]
fn member_count_hidden(world: &BoardWorld, index: u64, count: u64) -> Result<(), eyre::Report> {
    expect_count(world, ContainerId::Member(member(index)?), count, false)
}

#[then("the pool has {count:u64} tasks with the placeholder shown")]
fn pool_count_shown(world: &BoardWorld, count: u64) -> Result<(), eyre::Report> {
    expect_count(world, ContainerId::Pool, count, true)
}

#[then(r#"the task status is "{label}""#)]
fn task_status_is(world: &BoardWorld, label: String) -> Result<(), eyre::Report> {
    let task = world
        .board
        .task(world.task_id()?)
        .ok_or_else(|| eyre::eyre!("task vanished"))?;
    let actual = task.status().map(|status| status.label());
    if actual != Some(label.as_str()) {
        return Err(eyre::eyre!("expected status {label}, found {actual:?}"));
    }
    Ok(())
}

#[then("the task has no status")]
fn task_has_no_status(world: &BoardWorld) -> Result<(), eyre::Report> {
    let task = world
        .board
        .task(world.task_id()?)
        .ok_or_else(|| eyre::eyre!("task vanished"))?;
    if let Some(status) = task.status() {
        return Err(eyre::eyre!("expected no status, found {status}"));
    }
    Ok(())
}

#[then(r#"the last action fails with message "{message}""#)]
fn last_action_message(world: &BoardWorld, message: String) -> Result<(), eyre::Report> {
    let actual = world
        .last_error
        .as_ref()
        .and_then(BoardError::user_message);
    if actual != Some(message.as_str()) {
        return Err(eyre::eyre!("expected message {message:?}, found {actual:?}"));
    }
    Ok(())
}

#[then("the last action fails because the task is not assigned")]
fn last_action_not_assigned(world: &BoardWorld) -> Result<(), eyre::Report> {
    if !matches!(
        world.last_error,
        Some(BoardError::Domain(BoardDomainError::NotAssigned(_)))
    ) {
        return Err(eyre::eyre!(
            "expected NotAssigned error, got {:?}",
            world.last_error
        ));
    }
    Ok(())
}

#[then("the last action fails because the task was not found")]
fn last_action_task_not_found(world: &BoardWorld) -> Result<(), eyre::Report> {
    if !matches!(world.last_error, Some(BoardError::TaskNotFound(_))) {
        return Err(eyre::eyre!(
            "expected TaskNotFound error, got {:?}",
            world.last_error
        ));
    }
    Ok(())
}
