//! Uniform random permutation.
//!
//! The matching engine is fully deterministic for a fixed giver order; all
//! randomness enters the system here, by permuting the order before each
//! attempt. The randomness source is caller-supplied rather than a global
//! RNG, so tests can inject a seeded generator and replay exact runs.
//!
//! Not security-sensitive: any uniform [`Rng`] will do.

use rand::Rng;

/// Shuffle `items` in place with the Fisher-Yates algorithm.
///
/// Walks `i` from the last index down to 1, draws a uniform `j` in
/// `[0, i]` inclusive, and swaps. Every permutation is equally likely given
/// a uniform generator.
///
/// ## Example
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use santa_match::shuffle::shuffle;
///
/// let mut order: Vec<usize> = (0..10).collect();
/// shuffle(&mut order, &mut ChaCha8Rng::seed_from_u64(42));
///
/// let mut sorted = order.clone();
/// sorted.sort_unstable();
/// assert_eq!(sorted, (0..10).collect::<Vec<_>>()); // still a permutation
/// ```
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
