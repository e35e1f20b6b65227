//! Nearest-neighbour constructive heuristic.
//!
//! Builds an assignment incrementally: a random first placement, then
//! repeatedly the unplaced facility with the strongest flow affinity to
//! the one placed last, put on the free location with the lowest partial
//! cost against everything already placed. Used standalone or as a seed
//! for the local-search refiners.

mod config;
mod runner;

pub use config::ConstructiveConfig;
pub use runner::{construct, ConstructiveResult, ConstructiveRunner};
