//! Status of an assigned task.

use super::ParseTaskStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Progress of a task once it has been assigned to a team member.
///
/// Every status can move to every other status; there is no terminal state.
/// Unassigned tasks carry no status at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Assigned, work has not begun.
    NotStarted,
    /// Work is under way.
    Ongoing,
    /// Work is complete.
    Finished,
}

impl TaskStatus {
    /// All statuses in the order they are offered to the user.
    pub const ALL: [Self; 3] = [Self::NotStarted, Self::Ongoing, Self::Finished];

    /// Status given to a task the first time it is assigned.
    #[must_use]
    pub const fn initial() -> Self {
        Self::NotStarted
    }

    /// Returns the human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::Ongoing => "Ongoing",
            Self::Finished => "Finished",
        }
    }

    /// Returns the style token the renderer attaches to a task in this
    /// status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not-started",
            Self::Ongoing => "ongoing",
            Self::Finished => "finished",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    /// Accepts labels (`"Not Started"`), style tokens (`"not-started"`) and
    /// snake case (`"not_started"`), ignoring case.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized: String = value
            .trim()
            .chars()
            .map(|c| match c {
                ' ' | '_' => '-',
                other => other.to_ascii_lowercase(),
            })
            .collect();
        match normalized.as_str() {
            "not-started" => Ok(Self::NotStarted),
            "ongoing" => Ok(Self::Ongoing),
            "finished" => Ok(Self::Finished),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}
