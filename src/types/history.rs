//! Prior-year assignment history.
//!
//! History maps each giver to the set of recipients they were assigned in
//! past rounds. The engine reads it to exclude repeats; it never mutates it.
//! An empty history (or an absent giver entry) imposes no constraint.

use std::collections::{HashMap, HashSet};

use crate::types::{Pairing, Participant};

/// Past giver → recipient assignments to avoid repeating.
///
/// ## Example
///
/// ```
/// use santa_match::types::{History, Participant};
///
/// let mut history = History::new();
/// history.record(Participant::new("Alice"), Participant::new("Bob"));
///
/// assert!(history.contains(&Participant::new("Alice"), &Participant::new("Bob")));
/// assert!(!history.contains(&Participant::new("Bob"), &Participant::new("Alice")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    past: HashMap<Participant, HashSet<Participant>>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `giver` was assigned `recipient` in a past round.
    pub fn record(&mut self, giver: Participant, recipient: Participant) {
        self.past.entry(giver).or_default().insert(recipient);
    }

    /// Record every pair of a completed round.
    ///
    /// Convenience for feeding one year's result back in before matching
    /// the next year.
    pub fn record_pairing(&mut self, pairing: &Pairing) {
        for pair in pairing.pairs() {
            self.record(pair.giver.clone(), pair.recipient.clone());
        }
    }

    /// Past recipients for `giver`, if any were recorded.
    pub fn past_recipients(&self, giver: &Participant) -> Option<&HashSet<Participant>> {
        self.past.get(giver)
    }

    /// Whether `giver` was ever assigned `recipient`.
    pub fn contains(&self, giver: &Participant, recipient: &Participant) -> bool {
        self.past
            .get(giver)
            .map_or(false, |recipients| recipients.contains(recipient))
    }

    /// Iterate over all (giver, past recipients) entries.
    pub fn iter(&self) -> impl Iterator<Item = (&Participant, &HashSet<Participant>)> {
        self.past.iter()
    }

    /// Whether no assignments have been recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.past.is_empty()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Pair;

    #[test]
    fn test_empty_history_constrains_nothing() {
        let history = History::new();
        assert!(history.is_empty());
        assert!(!history.contains(&Participant::new("A"), &Participant::new("B")));
        assert!(history.past_recipients(&Participant::new("A")).is_none());
    }

    #[test]
    fn test_record_accumulates_per_giver() {
        let mut history = History::new();
        history.record(Participant::new("A"), Participant::new("B"));
        history.record(Participant::new("A"), Participant::new("C"));

        let recipients = history.past_recipients(&Participant::new("A")).unwrap();
        assert_eq!(recipients.len(), 2);
        assert!(history.contains(&Participant::new("A"), &Participant::new("B")));
        assert!(history.contains(&Participant::new("A"), &Participant::new("C")));
    }

    #[test]
    fn test_direction_matters() {
        let mut history = History::new();
        history.record(Participant::new("A"), Participant::new("B"));
        assert!(!history.contains(&Participant::new("B"), &Participant::new("A")));
    }

    #[test]
    fn test_record_pairing() {
        let pairing = Pairing::new(vec![
            Pair {
                giver: Participant::new("A"),
                recipient: Participant::new("B"),
            },
            Pair {
                giver: Participant::new("B"),
                recipient: Participant::new("A"),
            },
        ]);

        let mut history = History::new();
        history.record_pairing(&pairing);
        assert!(history.contains(&Participant::new("A"), &Participant::new("B")));
        assert!(history.contains(&Participant::new("B"), &Participant::new("A")));
    }
}
