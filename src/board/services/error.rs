//! Service-level errors for board operations.

use crate::board::{
    domain::{BoardDomainError, MemberId, TaskId, ValidationError},
    ports::TaskRepositoryError,
};
use thiserror::Error;

/// Errors returned by [`super::BoardService`] operations.
///
/// None of these are fatal: validation failures are shown to the user, and
/// the rest reject a stale or invalid request without changing the board.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardError {
    /// Raw input failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// A task aggregate rejected the operation.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    /// The repository rejected the operation.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// No task has the given identifier, for example after it was deleted
    /// mid-drag.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),
    /// No member of the current roster has the given identifier.
    #[error("team member not found: {0}")]
    MemberNotFound(MemberId),
    /// The roster exists and re-creating it is disabled.
    #[error("team roster has already been created")]
    TeamAlreadyCreated,
}

impl BoardError {
    /// Returns the user-facing message for validation failures.
    #[must_use]
    pub const fn user_message(&self) -> Option<&'static str> {
        match self {
            Self::Validation(err) => Some(err.user_message()),
            _ => None,
        }
    }
}

/// Result type for board service operations.
pub type BoardResult<T> = Result<T, BoardError>;
