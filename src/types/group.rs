//! Exclusion groups.
//!
//! A group is a set of participants who must not be matched with each other
//! as giver/recipient (e.g., a household). Group membership is symmetric:
//! every member excludes every other member in both directions.
//!
//! A participant who appears in no group is implicitly a singleton, excluded
//! only from self-matching. A participant listed in more than one group gets
//! the union of the exclusions.

use crate::types::Participant;

/// A mutual-exclusion clique of participants.
///
/// ## Example
///
/// ```
/// use santa_match::types::{Group, Participant};
///
/// let household = Group::new([Participant::new("Alice"), Participant::new("Bob")]);
/// assert!(household.contains(&Participant::new("Alice")));
/// assert_eq!(household.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    members: Vec<Participant>,
}

impl Group {
    /// Create a group from its members.
    pub fn new(members: impl IntoIterator<Item = Participant>) -> Self {
        Self {
            members: members.into_iter().collect(),
        }
    }

    /// The group's members, in insertion order.
    #[inline]
    pub fn members(&self) -> &[Participant] {
        &self.members
    }

    /// Whether the given participant belongs to this group.
    pub fn contains(&self, participant: &Participant) -> bool {
        self.members.iter().any(|m| m == participant)
    }

    /// Number of members.
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the group has no members.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl FromIterator<Participant> for Group {
    fn from_iter<I: IntoIterator<Item = Participant>>(iter: I) -> Self {
        Self::new(iter)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
