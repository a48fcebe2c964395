//! Error taxonomy for the pairing engine.
//!
//! Two classes of failure:
//!
//! - **Invalid input**: the configuration itself is broken (too few
//!   participants, duplicate labels, group/history entries naming unknown
//!   participants). Surfaced immediately; no amount of reshuffling fixes it.
//! - **Infeasible**: no valid pairing exists under the constraints and the
//!   participant order that was tried. Recoverable by reshuffling and
//!   retrying; terminal only once the retry budget is exhausted.
//!
//! Infeasibility is a normal, expected result. It is a typed value, never a
//! panic.

use thiserror::Error;

/// Errors produced by roster validation and the matching engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// Fewer than two participants; no non-self pairing can exist.
    #[error("at least 2 participants are required, got {count}")]
    TooFewParticipants {
        /// How many participants were supplied.
        count: usize,
    },

    /// Two participants share the same label.
    #[error("duplicate participant label: {0:?}")]
    DuplicateParticipant(String),

    /// A group or history entry names a participant not in the roster.
    #[error("{context} references unknown participant {name:?}")]
    UnknownParticipant {
        /// The unknown label.
        name: String,
        /// Where the reference came from ("group" or "history").
        context: &'static str,
    },

    /// The giver order passed to the engine is not a permutation of the
    /// roster's participant indices.
    #[error("giver order must be a permutation of 0..{expected}")]
    InvalidOrder {
        /// Expected permutation length (participant count).
        expected: usize,
    },

    /// No valid pairing was found.
    #[error("no valid pairing found after {attempts} attempt(s)")]
    Infeasible {
        /// Number of attempts made before giving up.
        attempts: usize,
    },
}

impl MatchError {
    /// Whether this error is recoverable by reshuffle-and-retry.
    pub fn is_infeasible(&self) -> bool {
        matches!(self, MatchError::Infeasible { .. })
    }

    /// Whether this error is a configuration problem that retrying cannot fix.
    pub fn is_invalid_input(&self) -> bool {
        !self.is_infeasible()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
