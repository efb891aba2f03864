//! Command entry point for the rendering layer.

use mockable::Clock;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{BoardResult, BoardService, DragPayload, DropOutcome};
use crate::board::{
    domain::{ContainerId, MemberId, Task, TaskId, TaskStatus, TeamMember},
    ports::TaskRepository,
};

/// A user action delivered by the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BoardAction {
    /// Create the roster from comma-separated names.
    CreateTeam {
        /// Raw input text.
        raw: String,
    },
    /// Add a task to the shared pool.
    AddTask {
        /// Raw task text.
        raw: String,
    },
    /// Delete a task.
    DeleteTask {
        /// Task to delete.
        id: TaskId,
    },
    /// Assign a task directly, without a drag.
    Assign {
        /// Task to move.
        id: TaskId,
        /// Receiving member.
        member: MemberId,
    },
    /// Start dragging a task.
    BeginDrag {
        /// Dragged task.
        id: TaskId,
    },
    /// The pointer entered a drop target.
    DragOver {
        /// Hovered container.
        target: ContainerId,
    },
    /// The pointer left a drop target.
    DragLeave {
        /// Container left.
        target: ContainerId,
    },
    /// Drop the dragged task.
    Drop {
        /// Payload from [`BoardAction::BeginDrag`].
        payload: DragPayload,
        /// Drop target.
        target: ContainerId,
    },
    /// The drag ended without a drop.
    EndDrag,
    /// Change an assigned task's status.
    SetStatus {
        /// Task to update.
        id: TaskId,
        /// New status.
        status: TaskStatus,
    },
}

impl BoardAction {
    /// Returns a short name for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CreateTeam { .. } => "create_team",
            Self::AddTask { .. } => "add_task",
            Self::DeleteTask { .. } => "delete_task",
            Self::Assign { .. } => "assign",
            Self::BeginDrag { .. } => "begin_drag",
            Self::DragOver { .. } => "drag_over",
            Self::DragLeave { .. } => "drag_leave",
            Self::Drop { .. } => "drop",
            Self::EndDrag => "end_drag",
            Self::SetStatus { .. } => "set_status",
        }
    }
}

/// Result of a dispatched action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The roster was created.
    TeamCreated(Vec<TeamMember>),
    /// A task was added.
    TaskAdded(Task),
    /// A task was deleted, or nothing matched the identifier.
    TaskDeleted(Option<Task>),
    /// A task was assigned.
    TaskAssigned(Task),
    /// A drag started.
    DragStarted(DragPayload),
    /// The hovered drop target changed.
    HoverChanged(Option<ContainerId>),
    /// A drop completed.
    Dropped(DropOutcome),
    /// The drag state was cleared.
    DragEnded,
    /// A status changed.
    StatusChanged(Task),
}

impl<R, C> BoardService<R, C>
where
    R: TaskRepository,
    C: Clock,
{
    /// Applies one user action.
    ///
    /// # Errors
    ///
    /// Returns the error of the operation the action maps to.
    pub fn dispatch(&mut self, action: BoardAction) -> BoardResult<ActionOutcome> {
        debug!(action = action.name(), "dispatching board action");
        match action {
            BoardAction::CreateTeam { raw } => self
                .create_team_from_input(&raw)
                .map(ActionOutcome::TeamCreated),
            BoardAction::AddTask { raw } => self.add_task(&raw).map(ActionOutcome::TaskAdded),
            BoardAction::DeleteTask { id } => Ok(ActionOutcome::TaskDeleted(self.delete_task(id))),
            BoardAction::Assign { id, member } => {
                self.assign(id, member).map(ActionOutcome::TaskAssigned)
            }
            BoardAction::BeginDrag { id } => self.begin_drag(id).map(ActionOutcome::DragStarted),
            BoardAction::DragOver { target } => {
                self.drag_over(target);
                Ok(ActionOutcome::HoverChanged(self.drag_target()))
            }
            BoardAction::DragLeave { target } => {
                self.drag_leave(target);
                Ok(ActionOutcome::HoverChanged(self.drag_target()))
            }
            BoardAction::Drop { payload, target } => {
                self.drop(payload, target).map(ActionOutcome::Dropped)
            }
            BoardAction::EndDrag => {
                self.end_drag();
                Ok(ActionOutcome::DragEnded)
            }
            BoardAction::SetStatus { id, status } => {
                self.set_status(id, status).map(ActionOutcome::StatusChanged)
            }
        }
    }
}
