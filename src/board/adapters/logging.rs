//! Observer that reports board changes as `tracing` events.

use tracing::{debug, info};

use crate::board::{
    domain::{BoardChange, BoardEvent},
    ports::BoardObserver,
};

/// Emits one `tracing` event per board change.
///
/// Roster changes are reported at `info`, everything else at `debug`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl TracingObserver {
    /// Creates the observer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl BoardObserver for TracingObserver {
    fn on_change(&mut self, change: &BoardChange) {
        let pool = change.counts.pool().count;
        let total = change.counts.total();
        match &change.event {
            BoardEvent::TeamCreated {
                members,
                removed_tasks,
            } => info!(members, removed_tasks, pool, total, "team roster created"),
            event => debug!(?event, pool, total, "board changed"),
        }
    }
}
