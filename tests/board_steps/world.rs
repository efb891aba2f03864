//! Shared world state for task board BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::board::{
    adapters::memory::InMemoryTaskRepository,
    domain::{MemberId, TaskId},
    services::{BoardError, BoardService, DragPayload},
};

/// Board type used by the BDD world.
pub type TestBoard = BoardService<InMemoryTaskRepository, DefaultClock>;

/// Scenario world for task board behaviour tests.
pub struct BoardWorld {
    /// The board under test.
    pub board: TestBoard,
    /// Task the scenario is working with.
    pub current_task: Option<TaskId>,
    /// Payload of the drag in progress.
    pub pending_drag: Option<DragPayload>,
    /// Error of the last failed action, if any.
    pub last_error: Option<BoardError>,
}

impl BoardWorld {
    /// Creates a world with an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: BoardService::new(InMemoryTaskRepository::new(), Arc::new(DefaultClock)),
            current_task: None,
            pending_drag: None,
            last_error: None,
        }
    }

    /// Returns the scenario's current task.
    ///
    /// # Errors
    ///
    /// Returns an error when no task has been created yet.
    pub fn task_id(&self) -> Result<TaskId, eyre::Report> {
        self.current_task
            .ok_or_else(|| eyre::eyre!("missing current task in scenario world"))
    }

    /// Records the outcome of an action that may fail.
    pub fn record<T>(&mut self, result: Result<T, BoardError>) -> Option<T> {
        match result {
            Ok(value) => {
                self.last_error = None;
                Some(value)
            }
            Err(err) => {
                self.last_error = Some(err);
                None
            }
        }
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts a scenario member index into a member identifier.
///
/// # Errors
///
/// Returns an error when the index does not fit in `usize`.
pub fn member(index: u64) -> Result<MemberId, eyre::Report> {
    Ok(MemberId::from_index(usize::try_from(index)?))
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}
