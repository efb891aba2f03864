//! In-memory task repository.

use crate::board::{
    domain::{ContainerId, Task, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Session-local task repository backed by a vector.
///
/// Vector order is container order: an appended task lands after the tasks
/// already in its container.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    tasks: Vec<Task>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id() == id)
    }
}

impl TaskRepository for InMemoryTaskRepository {
    fn store(&mut self, task: Task) -> TaskRepositoryResult<()> {
        if self.position(task.id()).is_some() {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }
        self.tasks.push(task);
        Ok(())
    }

    fn update(&mut self, task: Task) -> TaskRepositoryResult<()> {
        let slot = self
            .tasks
            .iter_mut()
            .find(|stored| stored.id() == task.id())
            .ok_or(TaskRepositoryError::NotFound(task.id()))?;
        *slot = task;
        Ok(())
    }

    fn append(&mut self, task: Task) -> TaskRepositoryResult<()> {
        let index = self
            .position(task.id())
            .ok_or(TaskRepositoryError::NotFound(task.id()))?;
        self.tasks.remove(index);
        self.tasks.push(task);
        Ok(())
    }

    fn remove(&mut self, id: TaskId) -> Option<Task> {
        self.position(id).map(|index| self.tasks.remove(index))
    }

    fn find_by_id(&self, id: TaskId) -> Option<Task> {
        self.tasks.iter().find(|task| task.id() == id).cloned()
    }

    fn list(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    fn count_in(&self, container: ContainerId) -> usize {
        self.tasks
            .iter()
            .filter(|task| task.container() == container)
            .count()
    }
}
