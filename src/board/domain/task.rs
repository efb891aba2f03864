//! Task aggregate root and its text value type.

use super::{BoardDomainError, ContainerId, MemberId, TaskId, TaskStatus};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Trimmed task text that passed validation.
///
/// Obtain one through [`super::validate_task_text`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskText(String);

impl TaskText {
    pub(super) const fn from_validated(value: String) -> Self {
        Self(value)
    }

    /// Returns the text as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskText {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Task aggregate root.
///
/// A task sits in the shared pool until it is assigned. Assignment gives it a
/// status exactly once; later moves keep whatever status it has.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    text: TaskText,
    status: Option<TaskStatus>,
    assignee: Option<MemberId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates an unassigned task.
    #[must_use]
    pub fn new(text: TaskText, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            text,
            status: None,
            assignee: None,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task text.
    #[must_use]
    pub const fn text(&self) -> &TaskText {
        &self.text
    }

    /// Returns the status, or `None` while the task is unassigned.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        self.status
    }

    /// Returns the member holding the task, if any.
    #[must_use]
    pub const fn assignee(&self) -> Option<MemberId> {
        self.assignee
    }

    /// Returns the container currently holding the task.
    #[must_use]
    pub const fn container(&self) -> ContainerId {
        match self.assignee {
            Some(member) => ContainerId::Member(member),
            None => ContainerId::Pool,
        }
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Moves the task into the given member's list.
    ///
    /// Returns `true` when this call initialized the status to
    /// [`TaskStatus::NotStarted`], which only happens on the first
    /// assignment.
    pub fn assign_to(&mut self, member: MemberId, clock: &impl Clock) -> bool {
        self.assignee = Some(member);
        let initialized = self.status.is_none();
        if initialized {
            self.status = Some(TaskStatus::initial());
        }
        self.touch(clock);
        initialized
    }

    /// Sets the status of an assigned task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::NotAssigned`] while the task is in the
    /// shared pool. The task is left unchanged.
    pub fn set_status(
        &mut self,
        status: TaskStatus,
        clock: &impl Clock,
    ) -> Result<(), BoardDomainError> {
        if self.status.is_none() {
            return Err(BoardDomainError::NotAssigned(self.id));
        }
        self.status = Some(status);
        self.touch(clock);
        Ok(())
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
