//! Board configuration.

use crate::board::domain::ValidationConfig;

/// Settings for a [`super::BoardService`].
///
/// # Examples
///
/// ```
/// use taskboard::board::services::BoardConfig;
///
/// let config = BoardConfig::default();
/// assert!(!config.allow_team_reset);
/// assert!(BoardConfig::default().with_team_reset().allow_team_reset);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardConfig {
    /// Minimum input lengths.
    pub validation: ValidationConfig,
    /// Whether the roster may be created more than once per session.
    ///
    /// Re-creating the roster deletes every task assigned to the previous
    /// members; pool tasks are kept.
    pub allow_team_reset: bool,
}

impl BoardConfig {
    /// Allows the roster to be replaced.
    #[must_use]
    pub const fn with_team_reset(mut self) -> Self {
        self.allow_team_reset = true;
        self
    }
}
