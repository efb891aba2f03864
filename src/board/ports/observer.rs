//! Observer port through which the rendering layer follows board changes.

use crate::board::domain::BoardChange;

/// Receives a notification after every successful board mutation.
///
/// The board never calls into presentation code directly; renderers
/// subscribe an observer and redraw from the change they receive.
pub trait BoardObserver {
    /// Handles one change. Counts in `change` are already reconciled.
    fn on_change(&mut self, change: &BoardChange);
}
