//! Simulated Annealing (SA).
//!
//! Single-solution trajectory search over the swap neighbourhood with
//! Metropolis acceptance. The initial temperature is calibrated from
//! sampled worsening moves, cooling is geometric, and the run persists
//! past the nominal cooling floor until it also exhausts its improvement
//! patience.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;

pub use config::AnnealingConfig;
pub use runner::{AnnealingResult, AnnealingRunner};
