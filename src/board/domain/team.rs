//! Team roster.

use super::{MemberId, MemberName, TeamMember};

/// Ordered list of team members.
///
/// Member identifiers are positions in the list, so they stay stable for as
/// long as the roster is not replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamRegistry {
    members: Vec<TeamMember>,
    created: bool,
}

impl TeamRegistry {
    /// Creates an empty registry with no roster yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the roster with `names`, in order.
    ///
    /// Returns the new members.
    pub fn create(&mut self, names: impl IntoIterator<Item = MemberName>) -> &[TeamMember] {
        self.members = names
            .into_iter()
            .enumerate()
            .map(|(index, name)| TeamMember::new(MemberId::from_index(index), name))
            .collect();
        self.created = true;
        &self.members
    }

    /// Returns `true` once a roster has been created.
    #[must_use]
    pub const fn is_created(&self) -> bool {
        self.created
    }

    /// Returns members in roster order.
    #[must_use]
    pub fn members(&self) -> &[TeamMember] {
        &self.members
    }

    /// Finds a member by identifier.
    #[must_use]
    pub fn find(&self, id: MemberId) -> Option<&TeamMember> {
        self.members.get(id.index())
    }

    /// Returns `true` when the member exists in the current roster.
    #[must_use]
    pub fn contains(&self, id: MemberId) -> bool {
        self.find(id).is_some()
    }
}
