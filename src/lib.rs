//! # santa-match
//!
//! Secret Santa pairing engine: assigns giver/recipient pairs among
//! participants while honoring exclusion groups (households), avoiding
//! prior-year repeats, and optionally forbidding reciprocal pairs.
//!
//! ## Architecture
//!
//! - **Types**: core data structures (Participant, Group, History, Pairing)
//! - **Roster**: validated input compiled to index-based constraint tables
//! - **Engine**: deterministic single-step-backtracking matcher, plus the
//!   shuffle-and-retry loop and an optional step trace
//! - **Shuffle**: Fisher-Yates permutation over a caller-supplied RNG
//!
//! ## Design Principles
//!
//! 1. **Determinism**: the engine holds no randomness; identical inputs
//!    (including the giver order) yield identical output
//! 2. **Injected randomness**: all variation comes from shuffling the giver
//!    order with a caller-supplied [`rand::Rng`]
//! 3. **Typed failure**: infeasibility is an expected [`MatchError`] value,
//!    and invalid configuration is rejected before the engine ever runs
//! 4. **Synchronous execution**: one attempt runs to completion with no I/O
//!    and no shared mutable state
//!
//! ## Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use santa_match::{assign_with_retries, DEFAULT_MAX_ATTEMPTS};
//! use santa_match::{Group, History, Participant, Roster};
//!
//! let participants = vec![
//!     Participant::new("Alice"),
//!     Participant::new("Bob"),
//!     Participant::new("Carol"),
//!     Participant::new("Dan"),
//! ];
//! let households = [Group::new([Participant::new("Alice"), Participant::new("Bob")])];
//!
//! let mut history = History::new();
//! history.record(Participant::new("Carol"), Participant::new("Dan"));
//!
//! let roster = Roster::new(participants, &households, &history).unwrap();
//! let mut rng = ChaCha8Rng::seed_from_u64(2024);
//! let pairing = assign_with_retries(&roster, false, &mut rng, DEFAULT_MAX_ATTEMPTS).unwrap();
//!
//! assert_eq!(pairing.len(), 4);
//! assert_ne!(pairing.recipient_for(&Participant::new("Carol")),
//!            Some(&Participant::new("Dan")));
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: Participant, Group, History, Pairing, MatchError
pub mod types;

/// Validated matching input with compiled constraint tables
pub mod roster;

/// Matching engine: backtracking matcher, retry loop, step trace
pub mod engine;

/// Fisher-Yates shuffle
pub mod shuffle;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use engine::{
    assign_with_retries, MatchObserver, MatchingEngine, NullObserver, RecordingObserver,
    TraceEvent, DEFAULT_MAX_ATTEMPTS,
};
pub use roster::Roster;
pub use shuffle::shuffle;
pub use types::{Group, History, MatchError, Pair, Pairing, Participant};
