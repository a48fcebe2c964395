//! Core data types for santa-match.
//!
//! ## Types
//!
//! - [`Participant`]: an opaque string label, unique within a roster
//! - [`Group`]: a mutual-exclusion clique (e.g., a household)
//! - [`History`]: giver → past recipients, never repeated
//! - [`Pair`] / [`Pairing`]: the engine's ordered output
//! - [`MatchError`]: invalid-input vs infeasible failure taxonomy

mod error;
mod group;
mod history;
mod pairing;
mod participant;

// Re-export all types at module level
pub use error::MatchError;
pub use group::Group;
pub use history::History;
pub use pairing::{Pair, Pairing};
pub use participant::Participant;
