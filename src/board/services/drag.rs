//! Drag-and-drop assignment.
//!
//! A drag spans separate events. Between `begin_drag` and `drop` only the
//! [`DragPayload`] travels with the pointer, so the dragged task may be
//! deleted in the meantime; the drop then fails with
//! [`super::BoardError::TaskNotFound`] instead of touching the board.

use mockable::Clock;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{BoardResult, BoardService};
use crate::board::{
    domain::{BoardEvent, ContainerId, ParseIdError, Task, TaskId},
    ports::TaskRepository,
};

/// Data carried from drag start to drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DragPayload {
    task: TaskId,
}

impl DragPayload {
    /// Creates a payload for the given task.
    #[must_use]
    pub const fn new(task: TaskId) -> Self {
        Self { task }
    }

    /// Returns the dragged task.
    #[must_use]
    pub const fn task_id(self) -> TaskId {
        self.task
    }

    /// Encodes the payload as the string a drag data transfer carries.
    #[must_use]
    pub fn to_transfer_data(self) -> String {
        self.task.to_string()
    }

    /// Decodes a payload from drag transfer data.
    ///
    /// # Errors
    ///
    /// Returns [`ParseIdError`] when the data is not a task identifier.
    pub fn from_transfer_data(data: &str) -> Result<Self, ParseIdError> {
        data.parse().map(Self::new)
    }
}

/// Result of a successful drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// The task moved into a member's list.
    Assigned {
        /// The task after assignment.
        task: Task,
        /// Whether the drop gave the task its initial status.
        status_initialized: bool,
    },
    /// The target does not accept drops; nothing moved.
    Ignored {
        /// The dropped task.
        task: TaskId,
        /// The target that refused it.
        target: ContainerId,
    },
}

/// Visual drag state: the in-flight task, where it came from, and the
/// container under the pointer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(super) struct DragState {
    session: Option<(TaskId, ContainerId)>,
    hover: Option<ContainerId>,
}

impl DragState {
    pub(super) fn dragged_task(&self) -> Option<TaskId> {
        self.session.map(|(task, _)| task)
    }

    pub(super) fn source(&self) -> Option<ContainerId> {
        self.session.map(|(_, source)| source)
    }

    pub(super) const fn hover(&self) -> Option<ContainerId> {
        self.hover
    }
}

impl<R, C> BoardService<R, C>
where
    R: TaskRepository,
    C: Clock,
{
    /// Starts dragging a task and returns the payload to carry to the drop.
    ///
    /// Counts are reconciled so the renderer shows fresh numbers while the
    /// drag is in progress.
    ///
    /// # Errors
    ///
    /// Returns [`super::BoardError::TaskNotFound`] when no task has the
    /// identifier.
    pub fn begin_drag(&mut self, task_id: TaskId) -> BoardResult<DragPayload> {
        let task = self.require_task(task_id).inspect_err(|_| {
            warn!(task_id = %task_id, "drag start for unknown task");
        })?;
        let source = task.container();
        self.drag = DragState {
            session: Some((task_id, source)),
            hover: None,
        };
        debug!(task_id = %task_id, source = %source, "drag started");
        self.publish(BoardEvent::DragStarted {
            task: task_id,
            source,
        });
        Ok(DragPayload::new(task_id))
    }

    /// Marks `target` as the container under the pointer.
    pub fn drag_over(&mut self, target: ContainerId) {
        self.drag.hover = Some(target);
    }

    /// Clears the hover mark when the pointer leaves `target`.
    pub fn drag_leave(&mut self, target: ContainerId) {
        if self.drag.hover == Some(target) {
            self.drag.hover = None;
        }
    }

    /// Cancels the visual drag state without moving anything.
    pub fn end_drag(&mut self) {
        self.drag = DragState::default();
    }

    /// Drops the dragged task on `target`.
    ///
    /// Dropping on a member assigns the task to them. The shared pool does not
    /// accept drops, so dropping there leaves the task where it is.
    ///
    /// # Errors
    ///
    /// Returns [`super::BoardError::TaskNotFound`] when the task vanished
    /// after the drag started, and [`super::BoardError::MemberNotFound`] when
    /// the target is not in the roster. The board is unchanged in both cases.
    pub fn drop(&mut self, payload: DragPayload, target: ContainerId) -> BoardResult<DropOutcome> {
        self.drag = DragState::default();
        let task_id = payload.task_id();
        let task = self.require_task(task_id).inspect_err(|_| {
            warn!(task_id = %task_id, target = %target, "drop of a task that no longer exists");
        })?;

        match target {
            ContainerId::Member(member) => {
                let (task, status_initialized) = self.assign_task(task, member)?;
                Ok(DropOutcome::Assigned {
                    task,
                    status_initialized,
                })
            }
            ContainerId::Pool => {
                debug!(task_id = %task_id, "drop on pool ignored");
                self.publish(BoardEvent::DropIgnored {
                    task: task_id,
                    target,
                });
                Ok(DropOutcome::Ignored {
                    task: task_id,
                    target,
                })
            }
        }
    }

    /// Returns the container the in-flight task was dragged from.
    #[must_use]
    pub fn drag_source(&self) -> Option<ContainerId> {
        self.drag.source()
    }

    /// Returns the container currently under the pointer.
    #[must_use]
    pub const fn drag_target(&self) -> Option<ContainerId> {
        self.drag.hover()
    }

    /// Returns the task being dragged, if any.
    #[must_use]
    pub fn dragged_task(&self) -> Option<TaskId> {
        self.drag.dragged_task()
    }
}
