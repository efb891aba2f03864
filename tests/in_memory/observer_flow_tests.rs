//! In-memory integration tests for change notifications.

use super::helpers::new_board;
use rstest::rstest;
use taskboard::board::{
    adapters::memory::RecordingObserver,
    domain::{BoardEvent, ContainerId, MemberId},
};

#[rstest]
fn recording_observer_sees_reconciled_counts() -> eyre::Result<()> {
    let recorder = RecordingObserver::new();
    let mut board = new_board();
    board.subscribe(recorder.clone());

    board.create_team_from_input("alice")?;
    let task = board.add_task("Write report")?;
    board.assign(task.id(), MemberId::from_index(0))?;
    board.delete_task(task.id());

    let changes = recorder.changes();
    eyre::ensure!(changes.len() == 4, "expected four changes, got {}", changes.len());
    for change in &changes {
        eyre::ensure!(
            change.counts.pool().placeholder_visible == (change.counts.pool().count == 0),
            "placeholder out of sync in {change:?}"
        );
    }
    let last = recorder
        .last()
        .ok_or_else(|| eyre::eyre!("missing last change"))?;
    eyre::ensure!(
        last.event
            == BoardEvent::TaskDeleted {
                task: task.id(),
                from: ContainerId::Member(MemberId::from_index(0)),
            },
        "unexpected last event {:?}",
        last.event
    );
    eyre::ensure!(last.counts.total() == 0, "board not empty");
    Ok(())
}
