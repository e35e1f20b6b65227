//! Tabu search configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration parameters for tabu search.
///
/// # Examples
///
/// ```
/// use qap_solver::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_patience(20)
///     .with_tenure(8)
///     .with_seed(42);
/// assert_eq!(config.patience, 20);
/// assert_eq!(config.tenure, Some(8));
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TabuConfig {
    /// Patience multiplier: the run stops after `patience · n`
    /// consecutive iterations without a new best.
    pub patience: usize,
    /// Iterations a created (location, facility) assignment stays
    /// forbidden. `None` uses the instance-dependent default n/2.
    pub tenure: Option<usize>,
    /// Random seed (None for entropy).
    pub seed: Option<u64>,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            patience: 10,
            tenure: None,
            seed: None,
        }
    }
}

impl TabuConfig {
    /// Sets the patience multiplier.
    pub fn with_patience(mut self, patience: usize) -> Self {
        self.patience = patience;
        self
    }

    /// Sets an explicit tabu tenure.
    pub fn with_tenure(mut self, tenure: usize) -> Self {
        self.tenure = Some(tenure);
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
