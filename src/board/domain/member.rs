//! Team member value types.

use super::{InputKind, MemberId, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display name of a team member.
///
/// Names are trimmed and their first character is upper-cased; the rest of
/// the name is kept as typed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberName(String);

impl MemberName {
    /// Creates a display name from one comma-separated piece of team input.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Empty`] when the value is empty after
    /// trimming.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty(InputKind::TeamNames));
        }
        Ok(Self(capitalize_first(trimmed)))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for MemberName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for MemberName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// A member of the team roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    id: MemberId,
    name: MemberName,
}

impl TeamMember {
    /// Creates a roster entry.
    #[must_use]
    pub const fn new(id: MemberId, name: MemberName) -> Self {
        Self { id, name }
    }

    /// Returns the member identifier.
    #[must_use]
    pub const fn id(&self) -> MemberId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub const fn name(&self) -> &MemberName {
        &self.name
    }
}
