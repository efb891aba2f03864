//! In-memory adapters.

mod observer;
mod task;

pub use observer::RecordingObserver;
pub use task::InMemoryTaskRepository;
