//! Benchmarks for the santa-match pairing engine.
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Run specific benchmark
//! cargo bench -- single_attempt
//! ```
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput,
};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use santa_match::{
    assign_with_retries, shuffle, Group, History, MatchingEngine, Participant, Roster,
    DEFAULT_MAX_ATTEMPTS,
};

// ============================================================================
// HELPER FUNCTIONS - Deterministic roster generation
// ============================================================================

/// Build a roster of `count` participants chunked into three-person
/// households, with one prior year of history (rotation by 1).
fn build_roster(count: usize) -> Roster {
    let participants: Vec<Participant> =
        (0..count).map(|i| Participant::new(format!("p{i:04}"))).collect();

    let groups: Vec<Group> = participants
        .chunks(3)
        .map(|chunk| Group::new(chunk.iter().cloned()))
        .collect();

    let mut history = History::new();
    for (i, giver) in participants.iter().enumerate() {
        history.record(giver.clone(), participants[(i + 1) % count].clone());
    }

    Roster::new(participants, &groups, &history).expect("bench roster is valid")
}

// ============================================================================
// BENCHMARKS
// ============================================================================

/// One deterministic engine attempt over the identity order.
fn bench_single_attempt(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_attempt");

    for &count in &[16usize, 64, 256] {
        let roster = build_roster(count);
        let order: Vec<usize> = (0..count).collect();
        let engine = MatchingEngine::new();

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| {
                black_box(engine.assign(black_box(&roster), black_box(&order), false))
            });
        });
    }

    group.finish();
}

/// The full shuffle-and-retry pipeline with a seeded RNG.
fn bench_with_retries(c: &mut Criterion) {
    let mut group = c.benchmark_group("with_retries");

    for &count in &[16usize, 64, 256] {
        let roster = build_roster(count);

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            b.iter(|| {
                black_box(assign_with_retries(
                    black_box(&roster),
                    false,
                    &mut rng,
                    DEFAULT_MAX_ATTEMPTS,
                ))
            });
        });
    }

    group.finish();
}

/// Fisher-Yates over a 1024-element order.
fn bench_shuffle(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut order: Vec<usize> = (0..1024).collect();

    c.bench_function("shuffle_1024", |b| {
        b.iter(|| shuffle(black_box(&mut order), &mut rng));
    });
}

criterion_group!(benches, bench_single_attempt, bench_with_retries, bench_shuffle);
criterion_main!(benches);
