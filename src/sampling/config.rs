//! Random baseline configurations.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for pure random sampling.
///
/// # Examples
///
/// ```
/// use qap_solver::sampling::SamplingConfig;
///
/// let config = SamplingConfig::default().with_iterations(5000).with_seed(42);
/// assert_eq!(config.iterations, 5000);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SamplingConfig {
    /// Independent random permutations to draw. Zero still yields a
    /// well-defined result: one evaluated random solution.
    pub iterations: usize,
    /// Random seed (None for entropy).
    pub seed: Option<u64>,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            iterations: 1000,
            seed: None,
        }
    }
}

impl SamplingConfig {
    /// Sets the number of random draws.
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Configuration for the random walk.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WalkConfig {
    /// Swap moves to take. Zero keeps the initial solution.
    pub max_iterations: usize,
    /// Random seed (None for entropy).
    pub seed: Option<u64>,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            max_iterations: 10_000,
            seed: None,
        }
    }
}

impl WalkConfig {
    /// Sets the number of walk steps.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
