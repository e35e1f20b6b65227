//! Solution helpers.
//!
//! A solution is a `Vec<usize>` of length n where `solution[location]`
//! names the facility assigned to that location.

use crate::random;
use rand::Rng;

/// Draws a uniformly random assignment of facilities to locations.
pub fn random_solution<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut solution: Vec<usize> = (0..n).collect();
    random::shuffle(&mut solution, rng);
    solution
}

/// Checks that `solution` is a permutation of `0..solution.len()`:
/// no duplicates, no omissions.
pub fn is_permutation(solution: &[usize]) -> bool {
    let mut seen = vec![false; solution.len()];
    for &facility in solution {
        if facility >= solution.len() || seen[facility] {
            return false;
        }
        seen[facility] = true;
    }
    true
}
