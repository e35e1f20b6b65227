//! Simulated annealing configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for simulated annealing.
///
/// The floor temperature is derived from `acceptance_probability` as
/// `t_min = −1 / ln(acceptance_probability)`; the run continues while the
/// temperature is above the floor or the non-improvement counter is below
/// `patience · n(n−1)/2`.
///
/// # Examples
///
/// ```
/// use qap_solver::annealing::AnnealingConfig;
///
/// let config = AnnealingConfig::default()
///     .with_alpha(0.95)
///     .with_patience(5)
///     .with_acceptance_probability(0.02);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnnealingConfig {
    /// Geometric cooling factor in (0, 1), applied every iteration.
    pub alpha: f64,
    /// Patience multiplier: the non-improvement cap is
    /// `patience · n(n−1)/2`.
    pub patience: usize,
    /// Target acceptance probability defining the floor temperature.
    /// Must lie in (0, 1).
    pub acceptance_probability: f64,
    /// Random seed (None for entropy).
    pub seed: Option<u64>,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            alpha: 0.98,
            patience: 10,
            acceptance_probability: 0.01,
            seed: None,
        }
    }
}

impl AnnealingConfig {
    /// Sets the geometric cooling factor.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the patience multiplier.
    pub fn with_patience(mut self, patience: usize) -> Self {
        self.patience = patience;
        self
    }

    /// Sets the floor acceptance probability.
    pub fn with_acceptance_probability(mut self, p: f64) -> Self {
        self.acceptance_probability = p;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.alpha <= 0.0 || self.alpha >= 1.0 {
            return Err(format!("alpha must be in (0, 1), got {}", self.alpha));
        }
        if self.acceptance_probability <= 0.0 || self.acceptance_probability >= 1.0 {
            return Err(format!(
                "acceptance_probability must be in (0, 1), got {}",
                self.acceptance_probability
            ));
        }
        Ok(())
    }
}
