//! Render data for the presentation layer.

use mockable::Clock;
use serde::{Deserialize, Serialize};

use super::BoardService;
use crate::board::{
    domain::{ContainerCount, ContainerId, MemberId, Task, TaskId, TaskStatus},
    ports::TaskRepository,
};

/// Everything a renderer needs to draw the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Roster in display order, each with its task list.
    pub members: Vec<MemberView>,
    /// The shared pool.
    pub pool: ContainerView,
    /// Task being dragged, if any.
    pub dragging: Option<TaskId>,
    /// Container the dragged task came from.
    pub drag_source: Option<ContainerId>,
    /// Container under the pointer.
    pub drag_target: Option<ContainerId>,
}

impl BoardSnapshot {
    /// Serializes the snapshot as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] when serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Returns the view of one container.
    #[must_use]
    pub fn container(&self, id: ContainerId) -> Option<&ContainerView> {
        match id {
            ContainerId::Pool => Some(&self.pool),
            ContainerId::Member(member) => self
                .members
                .iter()
                .find(|view| view.id == member)
                .map(|view| &view.container),
        }
    }
}

/// One roster entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberView {
    /// Member identifier.
    pub id: MemberId,
    /// Display name.
    pub name: String,
    /// The member's task list.
    pub container: ContainerView,
}

/// One container with its displayed count and placeholder flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerView {
    /// Container identifier.
    pub id: ContainerId,
    /// Displayed task count.
    pub count: usize,
    /// Whether the "no tasks" placeholder is shown.
    pub placeholder_visible: bool,
    /// Tasks in display order.
    pub tasks: Vec<TaskView>,
}

/// One task card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskView {
    /// Task identifier.
    pub id: TaskId,
    /// Task text.
    pub text: String,
    /// Status, absent while the task is in the pool.
    pub status: Option<TaskStatus>,
    /// Assigned member, absent while the task is in the pool.
    pub assignee: Option<MemberId>,
}

impl From<&Task> for TaskView {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id(),
            text: task.text().as_str().to_owned(),
            status: task.status(),
            assignee: task.assignee(),
        }
    }
}

fn container_view(id: ContainerId, count: ContainerCount, tasks: &[Task]) -> ContainerView {
    ContainerView {
        id,
        count: count.count,
        placeholder_visible: count.placeholder_visible,
        tasks: tasks
            .iter()
            .filter(|task| task.container() == id)
            .map(TaskView::from)
            .collect(),
    }
}

impl<R, C> BoardService<R, C>
where
    R: TaskRepository,
    C: Clock,
{
    /// Builds render data from the current tasks and the displayed counts.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        let tasks = self.all_tasks();
        let counts = self.counts();
        let members = self
            .members()
            .iter()
            .map(|member| {
                let id = ContainerId::Member(member.id());
                let count = counts.member(member.id()).unwrap_or_default();
                MemberView {
                    id: member.id(),
                    name: member.name().as_str().to_owned(),
                    container: container_view(id, count, &tasks),
                }
            })
            .collect();

        BoardSnapshot {
            members,
            pool: container_view(ContainerId::Pool, counts.pool(), &tasks),
            dragging: self.dragged_task(),
            drag_source: self.drag_source(),
            drag_target: self.drag_target(),
        }
    }
}
