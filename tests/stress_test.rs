//! Stress tests for the santa-match pairing engine.
//!
//! These tests verify:
//! 1. Large rosters with households and history still match
//! 2. Determinism is preserved across runs
//! 3. The retry loop stays far from its budget on realistic inputs
//!
//! ## Running Stress Tests
//!
//! ```bash
//! cargo test --release --test stress_test -- --nocapture
//! ```

use std::collections::HashSet;
use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use santa_match::{
    assign_with_retries, Group, History, Pairing, Participant, Roster, DEFAULT_MAX_ATTEMPTS,
};

// ============================================================================
// TEST CONSTANTS
// ============================================================================

/// Participant count for the large-roster test.
const STRESS_PARTICIPANTS: usize = 1_000;

/// Household size used when chunking the roster.
const HOUSEHOLD_SIZE: usize = 3;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Build a large roster: participants p0000..pNNNN, chunked into
/// three-person households, with two prior years of history formed by
/// rotating the participant list by 1 and by 2.
///
/// Every giver therefore excludes at most 2 household members and 2
/// historical recipients, which keeps the instance comfortably feasible at
/// any size.
fn build_stress_inputs(count: usize) -> (Vec<Participant>, Vec<Group>, History) {
    let participants: Vec<Participant> =
        (0..count).map(|i| Participant::new(format!("p{i:04}"))).collect();

    let groups: Vec<Group> = participants
        .chunks(HOUSEHOLD_SIZE)
        .map(|chunk| Group::new(chunk.iter().cloned()))
        .collect();

    let mut history = History::new();
    for shift in [1, 2] {
        for (i, giver) in participants.iter().enumerate() {
            let recipient = participants[(i + shift) % count].clone();
            history.record(giver.clone(), recipient);
        }
    }

    (participants, groups, history)
}

/// Assert the full set of completion invariants.
fn assert_valid(
    pairing: &Pairing,
    participants: &[Participant],
    groups: &[Group],
    history: &History,
) {
    let givers: HashSet<_> = pairing.iter().map(|pair| &pair.giver).collect();
    let recipients: HashSet<_> = pairing.iter().map(|pair| &pair.recipient).collect();
    let everyone: HashSet<_> = participants.iter().collect();
    assert_eq!(givers, everyone);
    assert_eq!(recipients, everyone);

    // Group membership by index for O(1) checks; the input sets are large.
    let mut household_of = vec![usize::MAX; participants.len()];
    let index: std::collections::HashMap<_, _> = participants
        .iter()
        .enumerate()
        .map(|(i, p)| (p.clone(), i))
        .collect();
    for (g, group) in groups.iter().enumerate() {
        for member in group.members() {
            household_of[index[member]] = g;
        }
    }

    for pair in pairing {
        assert_ne!(pair.giver, pair.recipient);
        let (gi, ri) = (index[&pair.giver], index[&pair.recipient]);
        assert_ne!(household_of[gi], household_of[ri], "within-household: {pair}");
        assert!(!history.contains(&pair.giver, &pair.recipient), "repeat: {pair}");
        assert_ne!(
            pairing.recipient_for(&pair.recipient),
            Some(&pair.giver),
            "reciprocal: {pair}",
        );
    }
}

// ============================================================================
// STRESS TESTS
// ============================================================================

/// Match a 1000-person roster with households and two years of history.
#[test]
fn stress_large_roster() {
    let (participants, groups, history) = build_stress_inputs(STRESS_PARTICIPANTS);

    let build_start = Instant::now();
    let roster = Roster::new(participants.clone(), &groups, &history).unwrap();
    println!("roster build: {:.2?}", build_start.elapsed());

    let match_start = Instant::now();
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let pairing =
        assign_with_retries(&roster, false, &mut rng, DEFAULT_MAX_ATTEMPTS).unwrap();
    println!(
        "matched {} participants in {:.2?}",
        STRESS_PARTICIPANTS,
        match_start.elapsed(),
    );

    assert_valid(&pairing, &participants, &groups, &history);
}

/// Same seed, same pairing - across independent rosters built from the
/// same inputs.
#[test]
fn stress_determinism_across_runs() {
    let (participants, groups, history) = build_stress_inputs(300);

    let run = || {
        let roster = Roster::new(participants.clone(), &groups, &history).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assign_with_retries(&roster, false, &mut rng, DEFAULT_MAX_ATTEMPTS).unwrap()
    };

    assert_eq!(run(), run());
}

/// Many seeds, every result valid. Catches order-dependent constraint
/// leaks that a single lucky shuffle would hide.
#[test]
fn stress_many_seeds_all_valid() {
    let (participants, groups, history) = build_stress_inputs(60);
    let roster = Roster::new(participants.clone(), &groups, &history).unwrap();

    for seed in 0..100 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let pairing =
            assign_with_retries(&roster, false, &mut rng, DEFAULT_MAX_ATTEMPTS).unwrap();
        assert_valid(&pairing, &participants, &groups, &history);
    }
}
