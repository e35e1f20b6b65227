//! Swap-neighbourhood search for the Quadratic Assignment Problem (QAP).
//!
//! Given an n×n flow matrix and an n×n distance matrix, every algorithm
//! in this crate looks for a low-cost assignment of facilities to
//! locations (a permutation with `solution[location] = facility`)
//! minimizing the total flow-weighted distance.
//!
//! Provided algorithms, all sharing one swap neighbourhood and its O(n)
//! incremental delta evaluation:
//!
//! - **Steepest descent**: full neighbourhood scan, best strictly
//!   improving move, optional random restarts.
//! - **Greedy descent**: first strictly improving move in a fixed scan
//!   order.
//! - **Simulated Annealing (SA)**: adaptive initial temperature,
//!   geometric cooling, Metropolis acceptance.
//! - **Tabu Search (TS)**: sampled neighbourhood, elite candidate list,
//!   (location, facility) tenure table with aspiration.
//! - **Nearest-neighbour construction**: greedy insertion from a random
//!   first placement, standalone or as a seed for refinement.
//! - **Random sampling / random walk**: the trivial quality floors every
//!   other algorithm must beat.
//!
//! # Architecture
//!
//! The `problem` module holds the immutable instance, the evaluators,
//! and the instance-file parser; each algorithm lives in its own module
//! behind a config + runner pair; the `solver` module wraps the closed
//! set of variants behind one `name`/`describe`/`solve` surface plus a
//! configuration-string factory. Argument handling, metrics persistence,
//! and experiment orchestration are external collaborators: the core
//! fills one [`solver::RunRecord`] per run and hands it to an injected
//! [`solver::MetricsSink`].
//!
//! Solvers are single-threaded and synchronous. Every invocation owns
//! its working buffers and its random generator, so a shared instance
//! can back any number of concurrent, independent invocations.
//!
//! # Examples
//!
//! ```
//! use qap_solver::problem::QapInstance;
//! use qap_solver::solver::Solver;
//!
//! let instance = QapInstance::new(
//!     3,
//!     vec![vec![0, 2, 3], vec![2, 0, 1], vec![3, 1, 0]],
//!     vec![vec![0, 5, 2], vec![5, 0, 4], vec![2, 4, 0]],
//! )
//! .unwrap();
//!
//! let solver = Solver::parse("steepest:seed=42").unwrap();
//! let result = solver.solve(&instance);
//! assert_eq!(result.solution.len(), 3);
//! ```

pub mod annealing;
pub mod constructive;
pub mod descent;
pub mod neighborhood;
pub mod problem;
pub mod random;
pub mod sampling;
pub mod solver;
pub mod tabu;
