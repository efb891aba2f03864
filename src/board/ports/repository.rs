//! Repository port for task storage and container scans.

use crate::board::domain::{ContainerId, Task, TaskId};
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task storage contract.
///
/// Implementations keep tasks in container order: a task stored or moved into
/// a container is listed after the tasks already there. Counts are always
/// derived by scanning, never cached.
pub trait TaskRepository {
    /// Stores a new task at the end of its container.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::DuplicateTask`] when the task ID already
    /// exists.
    fn store(&mut self, task: Task) -> TaskRepositoryResult<()>;

    /// Replaces an existing task in place.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    fn update(&mut self, task: Task) -> TaskRepositoryResult<()>;

    /// Replaces an existing task and moves it to the end of its container.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist.
    fn append(&mut self, task: Task) -> TaskRepositoryResult<()>;

    /// Removes a task, returning it when it existed.
    fn remove(&mut self, id: TaskId) -> Option<Task>;

    /// Finds a task by identifier.
    fn find_by_id(&self, id: TaskId) -> Option<Task>;

    /// Returns every task, pool and member containers interleaved in storage
    /// order.
    fn list(&self) -> Vec<Task>;

    /// Returns the tasks held by one container, in container order.
    fn list_in(&self, container: ContainerId) -> Vec<Task> {
        self.list()
            .into_iter()
            .filter(|task| task.container() == container)
            .collect()
    }

    /// Counts the tasks held by one container.
    fn count_in(&self, container: ContainerId) -> usize {
        self.list()
            .iter()
            .filter(|task| task.container() == container)
            .count()
    }
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),
}
