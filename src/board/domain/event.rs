//! Change notifications published to board observers.

use super::{BoardCounts, ContainerId, MemberId, TaskId, TaskStatus};
use serde::{Deserialize, Serialize};

/// What happened in a mutating board operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BoardEvent {
    /// The roster was created or replaced.
    TeamCreated {
        /// Number of members in the new roster.
        members: usize,
        /// Tasks deleted because their member no longer exists.
        removed_tasks: usize,
    },
    /// A task was added to the shared pool.
    TaskAdded {
        /// The new task.
        task: TaskId,
    },
    /// A task was deleted.
    TaskDeleted {
        /// The deleted task.
        task: TaskId,
        /// Container that held it.
        from: ContainerId,
    },
    /// A task was moved into a member's list.
    TaskAssigned {
        /// The moved task.
        task: TaskId,
        /// Container the task left.
        from: ContainerId,
        /// Receiving member.
        member: MemberId,
        /// Whether this assignment gave the task its initial status.
        status_initialized: bool,
    },
    /// An assigned task changed status.
    StatusChanged {
        /// The task.
        task: TaskId,
        /// The new status.
        status: TaskStatus,
    },
    /// A drag began.
    DragStarted {
        /// Dragged task.
        task: TaskId,
        /// Container the task is dragged from.
        source: ContainerId,
    },
    /// A drop landed on a target that does not accept tasks.
    DropIgnored {
        /// Dropped task.
        task: TaskId,
        /// Target of the drop.
        target: ContainerId,
    },
}

/// Notification delivered to observers after every successful mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardChange {
    /// The mutation that ran.
    pub event: BoardEvent,
    /// Counts reconciled right after the mutation.
    pub counts: BoardCounts,
}
