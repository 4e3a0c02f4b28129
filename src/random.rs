//! Seeded randomness helpers shared by every algorithm in the crate.
//!
//! All stochastic choices in a run flow from one [`StdRng`] created by
//! [`create_rng`], so a fixed seed reproduces a run exactly.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Creates a deterministic random number generator from `seed`.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Draws `count` distinct indices from `0..pool_size`, never returning
/// `exclude`.
///
/// Selection is without replacement: the candidate pool is shuffled once and
/// consumed in order, so no draw is repeated and no retry loop is needed.
/// The number of draws is bounded by the pool size regardless of how
/// unlucky the shuffle is.
///
/// Callers are responsible for pool sizing: the pool must still hold at
/// least `count` indices after removing `exclude`. Undersized pools are a
/// caller bug and only checked via `debug_assert`.
pub fn sample_distinct<R: Rng>(
    pool_size: usize,
    count: usize,
    exclude: Option<usize>,
    rng: &mut R,
) -> Vec<usize> {
    let excluded = usize::from(exclude.is_some_and(|e| e < pool_size));
    debug_assert!(
        count + excluded <= pool_size,
        "pool of {pool_size} cannot yield {count} distinct indices"
    );

    let mut pool: Vec<usize> = (0..pool_size).collect();
    pool.shuffle(rng);
    pool.into_iter()
        .filter(|&i| Some(i) != exclude)
        .take(count)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    // ---- create_rng ----

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = create_rng(42);
        let mut b = create_rng(42);
        for _ in 0..32 {
            assert_eq!(a.random::<u64>(), b.random::<u64>());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = create_rng(1);
        let mut b = create_rng(2);
        let draws_a: Vec<u64> = (0..8).map(|_| a.random()).collect();
        let draws_b: Vec<u64> = (0..8).map(|_| b.random()).collect();
        assert_ne!(draws_a, draws_b);
    }

    // ---- sample_distinct ----

    #[test]
    fn test_samples_are_distinct_and_exclude_target() {
        let mut rng = create_rng(7);
        for _ in 0..1000 {
            let picks = sample_distinct(10, 3, Some(4), &mut rng);
            assert_eq!(picks.len(), 3);
            let unique: HashSet<usize> = picks.iter().copied().collect();
            assert_eq!(unique.len(), 3, "duplicate picks in {picks:?}");
            assert!(!picks.contains(&4), "excluded index drawn in {picks:?}");
            assert!(picks.iter().all(|&i| i < 10));
        }
    }

    #[test]
    fn test_no_exclusion_draws_from_whole_pool() {
        let mut rng = create_rng(11);
        let mut seen = HashSet::new();
        for _ in 0..200 {
            for pick in sample_distinct(5, 2, None, &mut rng) {
                seen.insert(pick);
            }
        }
        assert_eq!(seen.len(), 5, "every index should appear eventually");
    }

    #[test]
    fn test_exhaustive_draw_returns_everything_else() {
        let mut rng = create_rng(3);
        let picks = sample_distinct(4, 3, Some(2), &mut rng);
        let unique: HashSet<usize> = picks.iter().copied().collect();
        assert_eq!(unique, HashSet::from([0, 1, 3]));
    }

    #[test]
    fn test_out_of_range_exclusion_is_ignored() {
        let mut rng = create_rng(9);
        let picks = sample_distinct(3, 3, Some(99), &mut rng);
        let unique: HashSet<usize> = picks.iter().copied().collect();
        assert_eq!(unique, HashSet::from([0, 1, 2]));
    }

    #[test]
    fn test_deterministic_under_fixed_seed() {
        let a = sample_distinct(20, 5, Some(0), &mut create_rng(123));
        let b = sample_distinct(20, 5, Some(0), &mut create_rng(123));
        assert_eq!(a, b);
    }
}
