//! Random baselines.
//!
//! Pure random sampling establishes the trivial quality floor every other
//! algorithm must beat; the random walk drifts through the swap
//! neighbourhood accepting every move while tracking the best solution
//! seen. Both double as sanity checks for the evaluators and the
//! permutation generator.

mod config;
mod runner;

pub use config::{SamplingConfig, WalkConfig};
pub use runner::{SamplingResult, SamplingRunner, WalkResult, WalkRunner};
