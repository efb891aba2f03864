//! In-memory integration tests for complete board sessions.

use super::helpers::{ids_in, new_board};
use rstest::rstest;
use taskboard::board::{
    domain::{ContainerId, MemberId, TaskStatus},
    services::{BoardError, DragPayload},
};

const ALICE: MemberId = MemberId::from_index(0);
const BOB: MemberId = MemberId::from_index(1);

#[rstest]
fn counts_never_drift_from_the_partition() -> eyre::Result<()> {
    let mut board = new_board();
    board.create_team_from_input("alice, bob")?;
    let mut ids = Vec::new();
    for text in ["Task number one", "Task number two", "Task number three"] {
        ids.push(board.add_task(text)?.id());
    }
    let [first, second, third] = ids.as_slice() else {
        eyre::bail!("expected three tasks");
    };

    board.assign(*first, ALICE)?;
    board.assign(*second, BOB)?;
    board.assign(*third, BOB)?;
    board.delete_task(*second);
    board.assign(*third, ALICE)?;

    let counts = board.counts().clone();
    for container in [
        ContainerId::Pool,
        ContainerId::Member(ALICE),
        ContainerId::Member(BOB),
    ] {
        let displayed = counts
            .container(container)
            .ok_or_else(|| eyre::eyre!("missing count for {container}"))?;
        let actual = board.tasks_in(container).len();
        eyre::ensure!(displayed.count == actual, "{container} shows {} not {actual}", displayed.count);
        eyre::ensure!(
            displayed.placeholder_visible == (actual == 0),
            "{container} placeholder out of sync"
        );
    }
    eyre::ensure!(ids_in(&board, ContainerId::Member(ALICE)) == [*first, *third], "alice order");
    Ok(())
}

#[rstest]
fn drag_and_drop_session_mirrors_the_board() -> eyre::Result<()> {
    let mut board = new_board();
    board.create_team_from_input("alice, bob")?;
    let task = board.add_task("Prepare slides")?;

    let data = board.begin_drag(task.id())?.to_transfer_data();
    board.drag_over(ContainerId::Member(BOB));
    let payload = DragPayload::from_transfer_data(&data)?;
    board.drop(payload, ContainerId::Member(BOB))?;
    board.set_status(task.id(), TaskStatus::Ongoing)?;

    let snapshot = board.snapshot();
    let bob = snapshot
        .container(ContainerId::Member(BOB))
        .ok_or_else(|| eyre::eyre!("missing bob view"))?;
    eyre::ensure!(bob.count == 1 && !bob.placeholder_visible, "bob view stale");
    eyre::ensure!(
        bob.tasks.first().map(|t| t.status) == Some(Some(TaskStatus::Ongoing)),
        "status missing from view"
    );
    eyre::ensure!(snapshot.pool.placeholder_visible, "pool placeholder hidden");
    eyre::ensure!(snapshot.dragging.is_none(), "drag state leaked into snapshot");
    Ok(())
}

#[rstest]
fn deleting_mid_drag_is_tolerated() -> eyre::Result<()> {
    let mut board = new_board();
    board.create_team_from_input("alice")?;
    let task = board.add_task("Short lived")?;
    let payload = board.begin_drag(task.id())?;

    board.delete_task(task.id());
    let result = board.drop(payload, ContainerId::Member(ALICE));

    eyre::ensure!(result == Err(BoardError::TaskNotFound(task.id())), "unexpected {result:?}");
    eyre::ensure!(board.counts().total() == 0, "counts not empty");
    Ok(())
}

#[rstest]
fn snapshot_serializes_for_the_renderer() -> eyre::Result<()> {
    let mut board = new_board();
    board.create_team_from_input("alice")?;
    let task = board.add_task("Write report")?;

    let json: serde_json::Value = serde_json::from_str(&board.snapshot().to_json()?)?;

    eyre::ensure!(json["pool"]["count"] == 1, "pool count missing: {json}");
    eyre::ensure!(json["members"][0]["name"] == "Alice", "member name missing: {json}");
    eyre::ensure!(json["members"][0]["container"]["id"] == "team-0", "container id: {json}");
    eyre::ensure!(json["pool"]["tasks"][0]["status"].is_null(), "pool task has status");
    eyre::ensure!(json["members"][0]["id"] == "team-0", "member id: {json}");
    eyre::ensure!(
        json["pool"]["tasks"][0]["id"] == task.id().to_string(),
        "task id does not match drag data: {json}"
    );
    Ok(())
}
