//! Matching engine module for santa-match.
//!
//! ## Design Principles
//!
//! 1. **Determinism**: for a fixed giver order the engine has no randomness;
//!    same input always produces the same pairing (or the same failure).
//! 2. **Single-step undo**: a dead end undoes one decision, not the whole
//!    trail; the shuffle-and-retry loop is the recovery for orders local
//!    undo cannot rescue.
//! 3. **Typed infeasibility**: "no pairing exists for this order" is a
//!    normal result value, never a panic.
//! 4. **Observable**: every search step can be traced through a
//!    [`MatchObserver`] without affecting the search.
//!
//! ## Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use santa_match::engine::{assign_with_retries, DEFAULT_MAX_ATTEMPTS};
//! use santa_match::roster::Roster;
//! use santa_match::types::{Group, History, Participant};
//!
//! let roster = Roster::new(
//!     vec![
//!         Participant::new("Alice"),
//!         Participant::new("Bob"),
//!         Participant::new("Carol"),
//!         Participant::new("Dan"),
//!     ],
//!     &[Group::new([Participant::new("Alice"), Participant::new("Bob")])],
//!     &History::new(),
//! ).unwrap();
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(7);
//! let pairing = assign_with_retries(&roster, false, &mut rng, DEFAULT_MAX_ATTEMPTS).unwrap();
//!
//! // Alice and Bob share a household and never draw each other.
//! assert_ne!(pairing.recipient_for(&Participant::new("Alice")),
//!            Some(&Participant::new("Bob")));
//! ```

pub mod matcher;
pub mod retry;
pub mod trace;

pub use matcher::MatchingEngine;
pub use retry::{assign_with_retries, DEFAULT_MAX_ATTEMPTS};
pub use trace::{MatchObserver, NullObserver, RecordingObserver, TraceEvent};
