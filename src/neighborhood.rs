//! Swap-move enumeration and sampling.
//!
//! The swap neighbourhood of an n-element solution has exactly
//! n(n−1)/2 moves, one per unordered location pair. Descent enumerates
//! it exhaustively, annealing samples one random pair per iteration, and
//! tabu search samples a fixed fraction without replacement.

use crate::random;
use rand::Rng;

/// Number of moves in the swap neighbourhood: n(n−1)/2.
pub fn pair_count(n: usize) -> usize {
    n * (n - 1) / 2
}

/// All unordered location pairs `(i, j)` with `i < j`, in lexicographic
/// order. This is the deterministic scan order of first-improvement
/// descent.
pub fn swap_pairs(n: usize) -> Vec<(usize, usize)> {
    let mut pairs = Vec::with_capacity(pair_count(n));
    for i in 0..n {
        for j in (i + 1)..n {
            pairs.push((i, j));
        }
    }
    pairs
}

/// Samples `count` distinct pairs uniformly without replacement.
///
/// Requests larger than the neighbourhood return every pair.
pub fn sample_pairs<R: Rng + ?Sized>(n: usize, count: usize, rng: &mut R) -> Vec<(usize, usize)> {
    let mut pairs = swap_pairs(n);
    random::shuffle(&mut pairs, rng);
    pairs.truncate(count);
    pairs
}

/// Draws one uniformly random pair of distinct locations. Requires `n >= 2`.
pub fn random_pair<R: Rng + ?Sized>(n: usize, rng: &mut R) -> (usize, usize) {
    let i = rng.random_range(0..n);
    let mut j = rng.random_range(0..n);
    while j == i {
        j = rng.random_range(0..n);
    }
    (i, j)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use std::collections::HashSet;

    #[test]
    fn test_pair_count() {
        assert_eq!(pair_count(2), 1);
        assert_eq!(pair_count(5), 10);
        assert_eq!(pair_count(10), 45);
    }

    #[test]
    fn test_swap_pairs_complete_and_ordered() {
        let pairs = swap_pairs(4);
        assert_eq!(
            pairs,
            vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]
        );
    }

    #[test]
    fn test_sample_pairs_without_replacement() {
        let mut rng = create_rng(Some(42));
        let sample = sample_pairs(10, 20, &mut rng);
        assert_eq!(sample.len(), 20);
        let unique: HashSet<_> = sample.iter().collect();
        assert_eq!(unique.len(), 20);
    }

    #[test]
    fn test_sample_pairs_caps_at_neighbourhood_size() {
        let mut rng = create_rng(Some(42));
        assert_eq!(sample_pairs(3, 100, &mut rng).len(), 3);
    }

    #[test]
    fn test_random_pair_is_distinct() {
        let mut rng = create_rng(Some(42));
        for _ in 0..200 {
            let (i, j) = random_pair(2, &mut rng);
            assert_ne!(i, j);
            assert!(i < 2 && j < 2);
        }
    }
}
