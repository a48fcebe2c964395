//! Backtracking pair assignment.
//!
//! ## Algorithm
//!
//! One forward pass over the giver order with single-step undo:
//!
//! 1. For the giver at the cursor, filter the available pool down to the
//!    legal candidates (no self, no group co-member, no historical
//!    recipient, no reciprocal pair when disallowed), preserving pool order.
//! 2. If the giver's candidate cursor points at an untried candidate, take
//!    it: append the pair, remove the recipient from the pool, bump the
//!    candidate cursor, advance to the next giver.
//! 3. Otherwise the giver is at a dead end. With no pairs to undo the whole
//!    matching is infeasible. Otherwise undo exactly one step: drop the last
//!    pair, return its recipient to the pool at its original position, reset
//!    the exhausted giver's candidate cursor so it restarts from scratch,
//!    and revisit the previous giver — whose already-advanced cursor makes
//!    it try its next candidate rather than repeat the same one.
//!
//! The single-step undo can bounce between adjacent givers on pathological
//! inputs; a per-attempt backtrack budget bounds each attempt, and the
//! shuffle-and-retry loop in [`retry`](crate::engine::retry) is the designed
//! recovery. Deeper chronological backtracking is deliberately not
//! attempted.
//!
//! ## Determinism
//!
//! The engine holds no randomness. For a fixed roster, giver order, and
//! reciprocity flag, the output (success or infeasibility) is identical on
//! every call. Randomness is injected solely by permuting the order before
//! calling in.

use crate::engine::trace::{MatchObserver, NullObserver, TraceEvent};
use crate::roster::Roster;
use crate::types::{MatchError, Pair, Pairing};

/// Backtrack budget for a roster of `n` participants.
///
/// Generous enough that any attempt a santa-shaped instance can rescue by
/// local undo gets rescued; small enough that a bouncing attempt terminates
/// and the caller reshuffles instead.
fn default_backtrack_limit(n: usize) -> usize {
    n.saturating_mul(n).saturating_mul(4).max(64)
}

/// Deterministic single-step-backtracking matcher.
///
/// ## Example
///
/// ```
/// use santa_match::engine::MatchingEngine;
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
/// let engine = MatchingEngine::new();
/// let pairing = engine.assign(&roster, &[0, 1, 2], true).unwrap();
/// assert_eq!(pairing.len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MatchingEngine {
    /// Per-attempt backtrack budget override. `None` scales with roster size.
    backtrack_limit: Option<usize>,
}

impl MatchingEngine {
    /// Create an engine with the default backtrack budget.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with an explicit per-attempt backtrack budget.
    pub fn with_backtrack_limit(limit: usize) -> Self {
        Self {
            backtrack_limit: Some(limit),
        }
    }

    /// Assign a recipient to every giver, visiting givers in `order`.
    ///
    /// `order` must be a permutation of `0..roster.len()`; it is both the
    /// giver visiting sequence and the available-pool order, so it fully
    /// determines the result.
    ///
    /// # Errors
    ///
    /// - [`MatchError::InvalidOrder`] if `order` is not a permutation of the
    ///   roster's indices
    /// - [`MatchError::Infeasible`] if no valid pairing exists for this
    ///   order (the caller may reshuffle and retry)
    pub fn assign(
        &self,
        roster: &Roster,
        order: &[usize],
        allow_reciprocal: bool,
    ) -> Result<Pairing, MatchError> {
        self.assign_observed(roster, order, allow_reciprocal, &mut NullObserver)
    }

    /// Like [`assign`](Self::assign), emitting one [`TraceEvent`] per search
    /// step to `observer`.
    pub fn assign_observed(
        &self,
        roster: &Roster,
        order: &[usize],
        allow_reciprocal: bool,
        observer: &mut dyn MatchObserver,
    ) -> Result<Pairing, MatchError> {
        let n = roster.len();
        if !is_permutation(order, n) {
            return Err(MatchError::InvalidOrder { expected: n });
        }

        // Available pool: positions into `order` of participants not yet
        // consumed as a recipient. Kept sorted ascending, i.e. in the order
        // the caller gave, so candidate selection is deterministic.
        let mut pool: Vec<usize> = (0..n).collect();

        // Candidate cursor per giver position: how many candidates this
        // giver has already tried and rejected.
        let mut cursors = vec![0usize; n];

        // Assignments so far, as (giver position, recipient position).
        // Doubles as the undo stack: the top entry is the newest decision.
        let mut chosen: Vec<(usize, usize)> = Vec::with_capacity(n);

        // recipient_of[giver index] = recipient index, for the O(1)
        // reciprocal-pair check.
        let mut recipient_of: Vec<Option<usize>> = vec![None; n];

        let limit = self
            .backtrack_limit
            .unwrap_or_else(|| default_backtrack_limit(n));
        let mut backtracks = 0usize;

        let mut g = 0;
        while g < n {
            let giver = order[g];

            // Filtered candidate set, pool order preserved. A pair (r, giver)
            // already on the stack makes r reciprocal-excluded.
            let candidates: Vec<usize> = pool
                .iter()
                .copied()
                .filter(|&pos| {
                    let r = order[pos];
                    r != giver
                        && !roster.is_group_excluded(giver, r)
                        && !roster.is_past_recipient(giver, r)
                        && (allow_reciprocal || recipient_of[r] != Some(giver))
                })
                .collect();

            if observer.enabled() {
                observer.on_event(TraceEvent::Considering {
                    giver: roster.participant(giver).clone(),
                    candidates: candidates
                        .iter()
                        .map(|&pos| roster.participant(order[pos]).clone())
                        .collect(),
                });
            }

            if let Some(&pos) = candidates.get(cursors[g]) {
                let recipient = order[pos];
                cursors[g] += 1;

                // The candidate came from the pool, so the search finds it.
                if let Ok(at) = pool.binary_search(&pos) {
                    pool.remove(at);
                }
                recipient_of[giver] = Some(recipient);
                chosen.push((g, pos));

                if observer.enabled() {
                    observer.on_event(TraceEvent::Assigned {
                        giver: roster.participant(giver).clone(),
                        recipient: roster.participant(recipient).clone(),
                    });
                }
                g += 1;
            } else {
                // Dead end: every candidate tried, or none existed.
                if observer.enabled() {
                    observer.on_event(TraceEvent::DeadEnd {
                        giver: roster.participant(giver).clone(),
                    });
                }

                let Some((prev_g, prev_pos)) = chosen.pop() else {
                    // First giver with nothing left to undo: infeasible for
                    // this order.
                    return Err(MatchError::Infeasible { attempts: 1 });
                };

                backtracks += 1;
                if backtracks > limit {
                    // Bouncing without global progress; give the order up and
                    // let the caller reshuffle.
                    return Err(MatchError::Infeasible { attempts: 1 });
                }

                // Undo exactly one step. The exhausted giver restarts from
                // scratch next time it is reached; the previous giver keeps
                // its advanced cursor and so tries its next candidate.
                cursors[g] = 0;
                let at = match pool.binary_search(&prev_pos) {
                    Ok(i) | Err(i) => i,
                };
                pool.insert(at, prev_pos);
                recipient_of[order[prev_g]] = None;

                if observer.enabled() {
                    observer.on_event(TraceEvent::Backtracked {
                        giver: roster.participant(order[prev_g]).clone(),
                        returned: roster.participant(order[prev_pos]).clone(),
                    });
                }
                g = prev_g;
            }
        }

        let pairs = chosen
            .iter()
            .map(|&(giver_pos, recipient_pos)| Pair {
                giver: roster.participant(order[giver_pos]).clone(),
                recipient: roster.participant(order[recipient_pos]).clone(),
            })
            .collect();
        Ok(Pairing::new(pairs))
    }
}

/// Whether `order` is a permutation of `0..n`.
fn is_permutation(order: &[usize], n: usize) -> bool {
    if order.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &position in order {
        if position >= n || seen[position] {
            return false;
        }
        seen[position] = true;
    }
    true
}

// ============================================================================
// Unit Tests
// ============================================================================
