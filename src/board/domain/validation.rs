//! Validation rules for raw team and task input.
//!
//! Each rule is a pure function over the raw text. Lengths are measured in
//! characters after trimming.

use super::{InputKind, MemberName, TaskText, ValidationError};

/// Minimum input lengths used by the validation rules.
///
/// # Examples
///
/// ```
/// use taskboard::board::domain::ValidationConfig;
///
/// let config = ValidationConfig::default();
/// assert_eq!(config.min_team_input_chars, 3);
/// assert_eq!(config.min_task_text_chars, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Minimum characters in the whole comma-separated team input.
    pub min_team_input_chars: usize,
    /// Minimum characters in a task's text.
    pub min_task_text_chars: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_team_input_chars: 3,
            min_task_text_chars: 5,
        }
    }
}

impl ValidationConfig {
    /// Creates a configuration that only rejects empty input.
    ///
    /// Useful for tests that build boards from short fixture names.
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            min_team_input_chars: 1,
            min_task_text_chars: 1,
        }
    }
}

/// Validates the comma-separated team input and returns member names in
/// input order.
///
/// The minimum length applies to the whole trimmed input, not to each name.
/// Pieces that are empty after trimming are dropped. Duplicate names are
/// kept.
///
/// # Errors
///
/// Returns [`ValidationError::Empty`] when the input is blank or contains no
/// names, and [`ValidationError::TooShort`] when the trimmed input is shorter
/// than [`ValidationConfig::min_team_input_chars`].
///
/// # Examples
///
/// ```
/// use taskboard::board::domain::{ValidationConfig, validate_team_input};
///
/// let names = validate_team_input(" alice, bob ,", &ValidationConfig::default())
///     .expect("valid team input");
/// let names: Vec<&str> = names.iter().map(|name| name.as_str()).collect();
/// assert_eq!(names, ["Alice", "Bob"]);
/// ```
pub fn validate_team_input(
    raw: &str,
    config: &ValidationConfig,
) -> Result<Vec<MemberName>, ValidationError> {
    let trimmed = check_length(raw, InputKind::TeamNames, config.min_team_input_chars)?;
    let names: Vec<MemberName> = trimmed
        .split(',')
        .filter_map(|piece| MemberName::new(piece).ok())
        .collect();
    if names.is_empty() {
        return Err(ValidationError::Empty(InputKind::TeamNames));
    }
    Ok(names)
}

/// Validates task text and returns it trimmed.
///
/// # Errors
///
/// Returns [`ValidationError::Empty`] when the text is blank and
/// [`ValidationError::TooShort`] when the trimmed text is shorter than
/// [`ValidationConfig::min_task_text_chars`].
pub fn validate_task_text(raw: &str, config: &ValidationConfig) -> Result<TaskText, ValidationError> {
    let trimmed = check_length(raw, InputKind::TaskText, config.min_task_text_chars)?;
    Ok(TaskText::from_validated(trimmed.to_owned()))
}

fn check_length(raw: &str, input: InputKind, min: usize) -> Result<&str, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty(input));
    }
    let actual = trimmed.chars().count();
    if actual < min {
        return Err(ValidationError::TooShort { input, min, actual });
    }
    Ok(trimmed)
}
