//! Seeded random sources and permutation shuffling.
//!
//! Every stochastic operation in this crate takes its random source as an
//! explicit `&mut R: Rng` argument. Runs are reproducible by building that
//! source with [`create_rng`] from a fixed seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Creates a deterministic RNG from a 64-bit seed.
///
/// # Examples
///
/// ```
/// use rand::Rng;
/// use u_antlion::random::create_rng;
///
/// let mut a = create_rng(7);
/// let mut b = create_rng(7);
/// assert_eq!(a.random::<u64>(), b.random::<u64>());
/// ```
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Shuffles a slice in place (Fisher–Yates, Durstenfeld variant).
///
/// Walks from the last position down to 1, swapping each position with a
/// uniformly drawn index in `0..=i`. Every permutation is equally likely.
///
/// # Complexity
/// O(n) time, O(1) extra space
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = create_rng(42);
        let mut b = create_rng(42);
        for _ in 0..100 {
            assert_eq!(a.random::<u64>(), b.random::<u64>());
        }
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut rng = create_rng(42);
        let mut items: Vec<usize> = (0..50).collect();
        shuffle(&mut items, &mut rng);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffle_empty_and_single() {
        let mut rng = create_rng(1);
        let mut empty: Vec<usize> = Vec::new();
        shuffle(&mut empty, &mut rng);
        assert!(empty.is_empty());

        let mut single = vec![9];
        shuffle(&mut single, &mut rng);
        assert_eq!(single, vec![9]);
    }

    #[test]
    fn test_shuffle_reaches_every_arrangement() {
        // 3! = 6 arrangements; 600 draws should hit all of them.
        let mut rng = create_rng(3);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..600 {
            let mut items = vec![0usize, 1, 2];
            shuffle(&mut items, &mut rng);
            seen.insert(items);
        }
        assert_eq!(seen.len(), 6);
    }
}
