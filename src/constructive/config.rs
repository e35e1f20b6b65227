//! Constructive heuristic configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the nearest-neighbour construction.
///
/// # Examples
///
/// ```
/// use qap_solver::constructive::ConstructiveConfig;
///
/// let config = ConstructiveConfig::default().with_random_starts(10);
/// assert_eq!(config.random_starts, 10);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConstructiveConfig {
    /// Independent constructions from random first placements; the best
    /// result wins. Zero still yields a well-defined result: one
    /// evaluated random solution.
    pub random_starts: usize,
    /// Random seed for the first placements (None for entropy).
    pub seed: Option<u64>,
}

impl Default for ConstructiveConfig {
    fn default() -> Self {
        Self {
            random_starts: 1,
            seed: None,
        }
    }
}

impl ConstructiveConfig {
    /// Sets the number of random starts.
    pub fn with_random_starts(mut self, n: usize) -> Self {
        self.random_starts = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
