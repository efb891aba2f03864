//! Domain model for the task board.
//!
//! The board domain models the team roster, task records with their
//! assignment and status, the containers tasks live in, and the derived
//! counts shown for each container. Nothing here knows about storage or
//! rendering.

mod container;
mod counts;
mod error;
mod event;
mod ids;
mod member;
mod status;
mod task;
mod team;
mod validation;

pub use container::ContainerId;
pub use counts::{BoardCounts, ContainerCount, MemberCount};
pub use error::{BoardDomainError, InputKind, ParseIdError, ParseTaskStatusError, ValidationError};
pub use event::{BoardChange, BoardEvent};
pub use ids::{MemberId, TaskId};
pub use member::{MemberName, TeamMember};
pub use status::TaskStatus;
pub use task::{Task, TaskText};
pub use team::TeamRegistry;
pub use validation::{ValidationConfig, validate_task_text, validate_team_input};
