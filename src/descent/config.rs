//! Descent configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for steepest and first-improvement descent.
///
/// # Examples
///
/// ```
/// use qap_solver::descent::DescentConfig;
///
/// let config = DescentConfig::default()
///     .with_max_iterations(2000)
///     .with_restarts(5)
///     .with_seed(42);
/// assert_eq!(config.max_iterations, 2000);
/// assert_eq!(config.restarts, 5);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DescentConfig {
    /// Maximum moves per restart. Zero keeps the initial solution as is.
    pub max_iterations: usize,
    /// Independent random restarts; the best result across restarts wins.
    /// Zero still yields a well-defined result: one evaluated random
    /// solution, unrefined.
    pub restarts: usize,
    /// Random seed for the initial solutions (None for entropy).
    pub seed: Option<u64>,
}

impl Default for DescentConfig {
    fn default() -> Self {
        Self {
            max_iterations: 10_000,
            restarts: 1,
            seed: None,
        }
    }
}

impl DescentConfig {
    /// Sets the per-restart move cap.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the number of independent random restarts.
    pub fn with_restarts(mut self, n: usize) -> Self {
        self.restarts = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
