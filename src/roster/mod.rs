//! Validated matching input.
//!
//! ## Architecture
//!
//! A [`Roster`] bundles the participant list, exclusion groups, and history
//! into one validated, read-only structure. Construction is where all
//! `InvalidInput`-class errors surface; once a roster exists, the engine can
//! assume every reference resolves and only infeasibility remains possible.
//!
//! Constraints are compiled to index form at construction:
//!
//! - **Label → index map** (HashMap): O(1) participant lookup
//! - **Group exclusions** (per-participant HashSet of indices): O(1)
//!   "is r in g's group" tests during candidate filtering
//! - **History exclusions** (per-giver HashSet of indices): O(1)
//!   "did g already give to r" tests
//!
//! The available pool itself stays an ordered vector inside the engine;
//! only membership tests use hashed sets, so candidate filtering is
//! proportional to the pool length with no repeated linear scans.
//!
//! ## Example
//!
//! ```
//! use santa_match::roster::Roster;
//! use santa_match::types::{Group, History, Participant};
//!
//! let participants = vec![
//!     Participant::new("Alice"),
//!     Participant::new("Bob"),
//!     Participant::new("Carol"),
//! ];
//! let households = [Group::new([Participant::new("Alice"), Participant::new("Bob")])];
//!
//! let roster = Roster::new(participants, &households, &History::new()).unwrap();
//! assert_eq!(roster.len(), 3);
//! assert!(roster.is_group_excluded(0, 1)); // Alice may not give to Bob
//! assert!(!roster.is_group_excluded(0, 2)); // ...but may give to Carol
//! ```

use std::collections::{HashMap, HashSet};

use crate::types::{Group, History, MatchError, Participant};

/// Validated participants, groups, and history, compiled for fast
/// constraint checks.
///
/// Read-only after construction. Participant indices are positions in the
/// original participant list and are stable for the roster's lifetime.
#[derive(Debug, Clone)]
pub struct Roster {
    /// Participants in input order. Index into this is the participant id
    /// used everywhere else.
    participants: Vec<Participant>,

    /// Label → index.
    index: HashMap<String, usize>,

    /// Per-participant group co-members (union over all groups containing
    /// the participant, self excluded).
    group_excluded: Vec<HashSet<usize>>,

    /// Per-giver historical recipients.
    history_excluded: Vec<HashSet<usize>>,
}

impl Roster {
    /// Validate and compile the matching input.
    ///
    /// # Errors
    ///
    /// - [`MatchError::TooFewParticipants`] if fewer than 2 participants
    /// - [`MatchError::DuplicateParticipant`] if two labels are equal
    /// - [`MatchError::UnknownParticipant`] if a group member or history
    ///   entry names a label not in the participant list
    pub fn new(
        participants: Vec<Participant>,
        groups: &[Group],
        history: &History,
    ) -> Result<Self, MatchError> {
        let count = participants.len();
        if count < 2 {
            return Err(MatchError::TooFewParticipants { count });
        }

        let mut index = HashMap::with_capacity(count);
        for (i, participant) in participants.iter().enumerate() {
            if index.insert(participant.name().to_string(), i).is_some() {
                return Err(MatchError::DuplicateParticipant(
                    participant.name().to_string(),
                ));
            }
        }

        let resolve = |p: &Participant, context: &'static str| {
            index
                .get(p.name())
                .copied()
                .ok_or_else(|| MatchError::UnknownParticipant {
                    name: p.name().to_string(),
                    context,
                })
        };

        // Union group cliques into per-participant exclusion sets.
        let mut group_excluded = vec![HashSet::new(); count];
        for group in groups {
            let mut ids = Vec::with_capacity(group.len());
            for member in group.members() {
                ids.push(resolve(member, "group")?);
            }
            for &a in &ids {
                for &b in &ids {
                    if a != b {
                        group_excluded[a].insert(b);
                    }
                }
            }
        }

        let mut history_excluded = vec![HashSet::new(); count];
        for (giver, recipients) in history.iter() {
            let g = resolve(giver, "history")?;
            for recipient in recipients {
                history_excluded[g].insert(resolve(recipient, "history")?);
            }
        }

        Ok(Self {
            participants,
            index,
            group_excluded,
            history_excluded,
        })
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Number of participants.
    #[inline]
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    /// A roster always holds at least 2 participants.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The participant at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[inline]
    pub fn participant(&self, index: usize) -> &Participant {
        &self.participants[index]
    }

    /// All participants, in input order.
    #[inline]
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    /// Index of `participant`, if present.
    pub fn index_of(&self, participant: &Participant) -> Option<usize> {
        self.index.get(participant.name()).copied()
    }

    // ========================================================================
    // Constraint checks (index form, O(1))
    // ========================================================================

    /// Whether `recipient` shares a group with `giver`.
    #[inline]
    pub fn is_group_excluded(&self, giver: usize, recipient: usize) -> bool {
        self.group_excluded[giver].contains(&recipient)
    }

    /// Whether `giver` already gave to `recipient` in a past round.
    #[inline]
    pub fn is_past_recipient(&self, giver: usize, recipient: usize) -> bool {
        self.history_excluded[giver].contains(&recipient)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
