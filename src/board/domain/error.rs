//! Error types for board domain validation and parsing.

use super::TaskId;
use std::fmt;
use thiserror::Error;

/// Raw user input checked by the validation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    /// Comma-separated team member names.
    TeamNames,
    /// Text of a new task.
    TaskText,
}

impl InputKind {
    /// Returns a stable identifier for the input.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TeamNames => "team names",
            Self::TaskText => "task text",
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned while validating raw user input.
///
/// Validation failures never alter board state; the caller shows
/// [`ValidationError::user_message`] and lets the user try again.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The input is empty after trimming.
    #[error("{0} must not be empty")]
    Empty(InputKind),

    /// The trimmed input is shorter than the configured minimum.
    #[error("{input} must be at least {min} characters long, got {actual}")]
    TooShort {
        /// Input that failed the check.
        input: InputKind,
        /// Minimum number of characters.
        min: usize,
        /// Number of characters after trimming.
        actual: usize,
    },
}

impl ValidationError {
    /// Returns the input that failed validation.
    #[must_use]
    pub const fn input(&self) -> InputKind {
        match self {
            Self::Empty(input) | Self::TooShort { input, .. } => *input,
        }
    }

    /// Returns the message shown to the user for this failure.
    ///
    /// Each input and failure kind maps to a distinct string.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::Empty(InputKind::TeamNames) => "Please enter at least one team name.",
            Self::TooShort {
                input: InputKind::TeamNames,
                ..
            } => "Team names must be at least 3 characters long.",
            Self::Empty(InputKind::TaskText) => "Task cannot be empty!",
            Self::TooShort {
                input: InputKind::TaskText,
                ..
            } => "Task must be at least 5 characters long!",
        }
    }
}

/// Errors returned by task aggregate operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The task is still in the shared pool and has no status.
    #[error("task {0} is not assigned to a team member")]
    NotAssigned(TaskId),
}

/// Error returned while parsing a task status from a label or style token.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing task, member or container identifiers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid board identifier: {0}")]
pub struct ParseIdError(pub String);
