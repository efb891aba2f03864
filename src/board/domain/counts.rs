//! Derived per-container counts and placeholder flags.

use super::{ContainerId, MemberId};
use serde::{Deserialize, Serialize};

/// Number of tasks in one container and whether its empty placeholder shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerCount {
    /// Tasks currently held by the container.
    pub count: usize,
    /// `true` exactly when `count` is zero.
    pub placeholder_visible: bool,
}

impl ContainerCount {
    /// Builds the display state for a container holding `count` tasks.
    #[must_use]
    pub const fn from_count(count: usize) -> Self {
        Self {
            count,
            placeholder_visible: count == 0,
        }
    }
}

impl Default for ContainerCount {
    fn default() -> Self {
        Self::from_count(0)
    }
}

/// Count for one team member's container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberCount {
    /// Member owning the container.
    pub member: MemberId,
    /// Display state of the container.
    pub count: ContainerCount,
}

/// Counts for every container on the board, recomputed on each reconcile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardCounts {
    pool: ContainerCount,
    members: Vec<MemberCount>,
}

impl Default for BoardCounts {
    fn default() -> Self {
        Self::new(ContainerCount::default(), Vec::new())
    }
}

impl BoardCounts {
    /// Creates a counts value; `members` follows roster order.
    #[must_use]
    pub const fn new(pool: ContainerCount, members: Vec<MemberCount>) -> Self {
        Self { pool, members }
    }

    /// Returns the shared-pool count.
    #[must_use]
    pub const fn pool(&self) -> ContainerCount {
        self.pool
    }

    /// Returns per-member counts in roster order.
    #[must_use]
    pub fn members(&self) -> &[MemberCount] {
        &self.members
    }

    /// Returns the count for one member, if the member exists.
    #[must_use]
    pub fn member(&self, id: MemberId) -> Option<ContainerCount> {
        self.members
            .iter()
            .find(|entry| entry.member == id)
            .map(|entry| entry.count)
    }

    /// Returns the count for any container.
    #[must_use]
    pub fn container(&self, container: ContainerId) -> Option<ContainerCount> {
        match container {
            ContainerId::Pool => Some(self.pool),
            ContainerId::Member(id) => self.member(id),
        }
    }

    /// Returns the number of tasks across all containers.
    #[must_use]
    pub fn total(&self) -> usize {
        self.members
            .iter()
            .map(|entry| entry.count.count)
            .fold(self.pool.count, usize::saturating_add)
    }
}
