//! Shared helpers for in-memory board integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use taskboard::board::{
    adapters::memory::InMemoryTaskRepository,
    domain::{ContainerId, Task, TaskId},
    services::BoardService,
};

/// Board type used across integration tests.
pub type TestBoard = BoardService<InMemoryTaskRepository, DefaultClock>;

/// Creates an empty board with the default configuration.
#[must_use]
pub fn new_board() -> TestBoard {
    BoardService::new(InMemoryTaskRepository::new(), Arc::new(DefaultClock))
}

/// Returns the task identifiers held by a container, in display order.
#[must_use]
pub fn ids_in(board: &TestBoard, container: ContainerId) -> Vec<TaskId> {
    board.tasks_in(container).iter().map(Task::id).collect()
}
