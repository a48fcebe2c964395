//! Shuffle-and-retry orchestration.
//!
//! One engine attempt is deterministic and can dead-end on an unlucky
//! order. The recovery is to reshuffle the giver order and try again, up to
//! a budget; only when the budget is spent does the run surface as
//! infeasible. This compensates for the engine's single-step undo and for
//! group/history configurations that kill many orderings early.

use rand::Rng;

use crate::engine::matcher::MatchingEngine;
use crate::roster::Roster;
use crate::shuffle::shuffle;
use crate::types::{MatchError, Pairing};

/// Default retry budget.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

/// Match with a freshly shuffled giver order per attempt until one
/// succeeds, or `max_attempts` orders have all dead-ended.
///
/// Attempts are sequential and independent; each holds only read-only
/// references to the roster.
///
/// # Errors
///
/// [`MatchError::Infeasible`] with the attempt count once the budget is
/// exhausted.
///
/// ## Example
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use santa_match::engine::{assign_with_retries, DEFAULT_MAX_ATTEMPTS};
/// use santa_match::roster::Roster;
/// use santa_match::types::{History, Participant};
///
/// let roster = Roster::new(
///     vec![
///         Participant::new("Alice"),
///         Participant::new("Bob"),
///         Participant::new("Carol"),
///     ],
///     &[],
///     &History::new(),
/// ).unwrap();
///
/// let mut rng = ChaCha8Rng::seed_from_u64(42);
/// let pairing = assign_with_retries(&roster, false, &mut rng, DEFAULT_MAX_ATTEMPTS).unwrap();
/// assert_eq!(pairing.len(), 3);
/// ```
pub fn assign_with_retries<R: Rng + ?Sized>(
    roster: &Roster,
    allow_reciprocal: bool,
    rng: &mut R,
    max_attempts: usize,
) -> Result<Pairing, MatchError> {
    let engine = MatchingEngine::new();
    let mut order: Vec<usize> = (0..roster.len()).collect();

    for _ in 0..max_attempts {
        shuffle(&mut order, rng);
        match engine.assign(roster, &order, allow_reciprocal) {
            Ok(pairing) => return Ok(pairing),
            Err(MatchError::Infeasible { .. }) => continue,
            Err(other) => return Err(other),
        }
    }
    Err(MatchError::Infeasible {
        attempts: max_attempts,
    })
}

// ============================================================================
// Unit Tests
// ============================================================================
