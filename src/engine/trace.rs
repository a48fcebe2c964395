//! Diagnostic step trace.
//!
//! The engine can emit one event per search step: the giver under
//! consideration with its filtered candidate set, each assignment, each dead
//! end, and each backtrack. Events are purely observational; nothing the
//! observer does feeds back into the search.
//!
//! Verbose renderers (like the demo binary) print events as they arrive;
//! tests collect them with [`RecordingObserver`] to assert on the exact
//! search path.

use crate::types::Participant;

/// One step of the matching search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEvent {
    /// The engine computed the filtered candidate set for `giver`.
    Considering {
        /// The giver whose turn it is.
        giver: Participant,
        /// Legal candidates remaining, in pool order.
        candidates: Vec<Participant>,
    },

    /// `giver` was assigned `recipient`.
    Assigned {
        giver: Participant,
        recipient: Participant,
    },

    /// `giver` had no untried candidate left.
    DeadEnd { giver: Participant },

    /// The engine undid the most recent assignment: `giver` is being
    /// revisited and `returned` went back into the available pool.
    Backtracked {
        giver: Participant,
        returned: Participant,
    },
}

/// Consumer of [`TraceEvent`]s.
pub trait MatchObserver {
    /// Called once per search step, in order.
    fn on_event(&mut self, event: TraceEvent);

    /// Whether the observer wants events at all.
    ///
    /// The engine skips building event payloads (which clone participant
    /// labels) when this returns false, so the no-op observer costs nothing.
    fn enabled(&self) -> bool {
        true
    }
}

/// Observer that discards everything. Backs the untraced entry points.
#[derive(Debug, Default)]
pub struct NullObserver;

impl MatchObserver for NullObserver {
    fn on_event(&mut self, _event: TraceEvent) {}

    fn enabled(&self) -> bool {
        false
    }
}

/// Observer that collects every event into a vector.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    /// Events in the order they were emitted.
    pub events: Vec<TraceEvent>,
}

impl RecordingObserver {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }
}

impl MatchObserver for RecordingObserver {
    fn on_event(&mut self, event: TraceEvent) {
        self.events.push(event);
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_observer_is_disabled() {
        assert!(!NullObserver.enabled());
    }

    #[test]
    fn test_recording_observer_keeps_order() {
        let mut observer = RecordingObserver::new();
        observer.on_event(TraceEvent::DeadEnd {
            giver: Participant::new("A"),
        });
        observer.on_event(TraceEvent::Assigned {
            giver: Participant::new("A"),
            recipient: Participant::new("B"),
        });

        assert!(observer.enabled());
        assert_eq!(observer.events.len(), 2);
        assert!(matches!(observer.events[0], TraceEvent::DeadEnd { .. }));
        assert!(matches!(observer.events[1], TraceEvent::Assigned { .. }));
    }
}
