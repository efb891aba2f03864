//! Application services for the task board.
//!
//! [`BoardService`] owns the session state. Its operations are spread over
//! several files by concern: roster and task store in `board`, drag and drop
//! in `drag`, counts in `reconcile`, the command entry point in `action` and
//! render data in `snapshot`.

mod action;
mod board;
mod config;
mod drag;
mod error;
mod reconcile;
mod snapshot;

pub use action::{ActionOutcome, BoardAction};
pub use board::BoardService;
pub use config::BoardConfig;
pub use drag::{DragPayload, DropOutcome};
pub use error::{BoardError, BoardResult};
pub use reconcile::reconcile_counts;
pub use snapshot::{BoardSnapshot, ContainerView, MemberView, TaskView};
