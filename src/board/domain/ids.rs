//! Identifier types for the board domain.

use super::ParseIdError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

const TASK_PREFIX: &str = "task-";
const MEMBER_PREFIX: &str = "team-";

/// Unique identifier for a task record.
///
/// Identifiers are time-ordered UUIDs, so a task created later always has a
/// greater identifier than one created earlier in the same session.
/// Serialized as `task-<uuid>`, the same string carried as drag data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct TaskId(Uuid);

impl TaskId {
    /// Creates a new identifier derived from the current time.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{TASK_PREFIX}{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = ParseIdError;

    /// Parses `task-<uuid>`; a bare UUID is accepted as well.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let raw = trimmed.strip_prefix(TASK_PREFIX).unwrap_or(trimmed);
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| ParseIdError(value.to_owned()))
    }
}

impl From<TaskId> for String {
    fn from(id: TaskId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for TaskId {
    type Error = ParseIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Identifier of a team member, derived from roster creation order.
///
/// Serialized as `team-<index>`, matching the member's container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct MemberId(usize);

impl MemberId {
    /// Creates the identifier for the member at `index` in the roster.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// Returns the roster position.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{MEMBER_PREFIX}{}", self.0)
    }
}

impl FromStr for MemberId {
    type Err = ParseIdError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        value
            .trim()
            .strip_prefix(MEMBER_PREFIX)
            .and_then(|index| index.parse::<usize>().ok())
            .map(Self)
            .ok_or_else(|| ParseIdError(value.to_owned()))
    }
}

impl From<MemberId> for String {
    fn from(id: MemberId) -> Self {
        id.to_string()
    }
}

impl TryFrom<String> for MemberId {
    type Error = ParseIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
