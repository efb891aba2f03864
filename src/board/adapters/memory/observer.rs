//! Observer that records every change it receives.

use std::cell::RefCell;
use std::rc::Rc;

use crate::board::{domain::BoardChange, ports::BoardObserver};

/// Observer that keeps every received change.
///
/// Clones share the same log, so a test can keep one handle and subscribe the
/// other.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    changes: Rc<RefCell<Vec<BoardChange>>>,
}

impl RecordingObserver {
    /// Creates an observer with an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the changes received so far.
    #[must_use]
    pub fn changes(&self) -> Vec<BoardChange> {
        self.changes.borrow().clone()
    }

    /// Returns the most recent change.
    #[must_use]
    pub fn last(&self) -> Option<BoardChange> {
        self.changes.borrow().last().cloned()
    }
}

impl BoardObserver for RecordingObserver {
    fn on_change(&mut self, change: &BoardChange) {
        self.changes.borrow_mut().push(change.clone());
    }
}
