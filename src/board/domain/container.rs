//! Containers that hold tasks.

use super::{MemberId, ParseIdError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const POOL_ID: &str = "pool";

/// A place a task can live: the shared pool or one member's list.
///
/// Serialized as `pool` or `team-<index>`, the same strings the renderer uses
/// as drop-target identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ContainerId {
    /// Tasks not yet assigned to anyone.
    Pool,
    /// Tasks assigned to the given member.
    Member(MemberId),
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pool => f.write_str(POOL_ID),
            Self::Member(id) => id.fmt(f),
        }
    }
}

impl FromStr for ContainerId {
    type Err = ParseIdError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim() == POOL_ID {
            return Ok(Self::Pool);
        }
        value.parse::<MemberId>().map(Self::Member)
    }
}

impl From<ContainerId> for String {
    fn from(container: ContainerId) -> Self {
        container.to_string()
    }
}

impl TryFrom<String> for ContainerId {
    type Error = ParseIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
