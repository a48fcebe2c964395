//! Pairing result types.
//!
//! A completed matching is an ordered list of giver → recipient pairs, one
//! per participant-as-giver, in the giver order the engine was given.
//!
//! ## Invariants (on engine output)
//!
//! - Bijection: every participant appears exactly once as giver and exactly
//!   once as recipient.
//! - No pair has giver == recipient.
//! - No pair crosses an exclusion group.
//! - No pair repeats a historical assignment.
//! - When reciprocity is disallowed, no two pairs (g, r) and (r, g) coexist.

use std::fmt;

use crate::types::Participant;

/// One giver → recipient assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    /// The participant giving a gift.
    pub giver: Participant,

    /// The participant receiving it.
    pub recipient: Participant,
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.giver, self.recipient)
    }
}

/// An ordered, complete set of giver → recipient pairs.
///
/// ## Example
///
/// ```
/// use santa_match::types::{History, Participant};
/// use santa_match::roster::Roster;
/// use santa_match::engine::MatchingEngine;
///
/// let roster = Roster::new(
///     vec![Participant::new("Alice"), Participant::new("Bob")],
///     &[],
///     &History::new(),
/// ).unwrap();
///
/// // With reciprocity allowed, two participants can swap gifts.
/// let pairing = MatchingEngine::new().assign(&roster, &[0, 1], true).unwrap();
/// assert_eq!(pairing.len(), 2);
/// assert_eq!(
///     pairing.recipient_for(&Participant::new("Alice")),
///     Some(&Participant::new("Bob")),
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pairing {
    pairs: Vec<Pair>,
}

impl Pairing {
    /// Create a pairing from an ordered pair list.
    pub fn new(pairs: Vec<Pair>) -> Self {
        Self { pairs }
    }

    /// The pairs, in giver order.
    #[inline]
    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    /// Number of pairs.
    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the pairing holds no pairs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Look up who `giver` gives to.
    pub fn recipient_for(&self, giver: &Participant) -> Option<&Participant> {
        self.pairs
            .iter()
            .find(|p| &p.giver == giver)
            .map(|p| &p.recipient)
    }

    /// Look up who gives to `recipient`.
    pub fn giver_for(&self, recipient: &Participant) -> Option<&Participant> {
        self.pairs
            .iter()
            .find(|p| &p.recipient == recipient)
            .map(|p| &p.giver)
    }

    /// Iterate over the pairs in giver order.
    pub fn iter(&self) -> std::slice::Iter<'_, Pair> {
        self.pairs.iter()
    }
}

impl<'a> IntoIterator for &'a Pairing {
    type Item = &'a Pair;
    type IntoIter = std::slice::Iter<'a, Pair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
