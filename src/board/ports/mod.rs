//! Port contracts for the task board.
//!
//! Ports define the storage and notification interfaces used by board
//! services, independent of any rendering technology.

pub mod observer;
pub mod repository;

pub use observer::BoardObserver;
pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
