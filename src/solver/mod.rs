//! Uniform solver surface.
//!
//! The closed set of algorithm variants behind one
//! `name`/`describe`/`solve` contract, the shared result and
//! run-accounting types, and the configuration-string factory.

mod factory;
mod result;

pub use result::{MetricsSink, RunRecord, SolverResult};
pub(crate) use result::Counters;

use crate::annealing::{AnnealingConfig, AnnealingRunner};
use crate::constructive::{ConstructiveConfig, ConstructiveRunner};
use crate::descent::{DescentConfig, DescentRunner, Strategy};
use crate::problem::QapInstance;
use crate::sampling::{SamplingConfig, SamplingRunner, WalkConfig, WalkRunner};
use crate::tabu::{TabuConfig, TabuRunner};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The closed set of search algorithms sharing the swap neighbourhood.
///
/// Every variant carries its own configuration; construct one directly or
/// through [`Solver::parse`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Solver {
    /// Steepest descent: full neighbourhood scan, single best improving move.
    Steepest(DescentConfig),
    /// First-improvement descent in fixed pair order.
    Greedy(DescentConfig),
    /// Simulated annealing with adaptive initial temperature.
    Annealing(AnnealingConfig),
    /// Tabu search with elite candidate list and aspiration.
    Tabu(TabuConfig),
    /// Nearest-neighbour constructive heuristic.
    Constructive(ConstructiveConfig),
    /// Pure random sampling.
    Random(SamplingConfig),
    /// Random walk over the swap neighbourhood.
    RandomWalk(WalkConfig),
}

impl Solver {
    /// Short identifier of the algorithm variant.
    pub fn name(&self) -> &'static str {
        match self {
            Solver::Steepest(_) => "Steepest",
            Solver::Greedy(_) => "Greedy",
            Solver::Annealing(_) => "SimulatedAnnealing",
            Solver::Tabu(_) => "TabuSearch",
            Solver::Constructive(_) => "NearestNeighbor",
            Solver::Random(_) => "Random",
            Solver::RandomWalk(_) => "RandomWalk",
        }
    }

    /// Human-readable description including the effective parameters.
    pub fn describe(&self) -> String {
        match self {
            Solver::Steepest(c) => format!(
                "Steepest descent over the swap neighbourhood (max iterations: {}, restarts: {})",
                c.max_iterations, c.restarts
            ),
            Solver::Greedy(c) => format!(
                "First-improvement descent over the swap neighbourhood (max iterations: {}, restarts: {})",
                c.max_iterations, c.restarts
            ),
            Solver::Annealing(c) => format!(
                "Simulated annealing with adaptive initial temperature (alpha: {}, patience: {}, floor acceptance: {})",
                c.alpha, c.patience, c.acceptance_probability
            ),
            Solver::Tabu(c) => match c.tenure {
                Some(tenure) => format!(
                    "Tabu search with elite candidate list and aspiration (patience: {}, tenure: {tenure})",
                    c.patience
                ),
                None => format!(
                    "Tabu search with elite candidate list and aspiration (patience: {}, tenure: n/2)",
                    c.patience
                ),
            },
            Solver::Constructive(c) => format!(
                "Nearest-neighbour construction ({} random starts)",
                c.random_starts
            ),
            Solver::Random(c) => {
                format!("Random solution sampling ({} iterations)", c.iterations)
            }
            Solver::RandomWalk(c) => format!(
                "Random walk over the swap neighbourhood (max iterations: {})",
                c.max_iterations
            ),
        }
    }

    /// Runs the algorithm and returns the best solution found.
    pub fn solve(&self, instance: &QapInstance) -> SolverResult {
        self.solve_with_record(instance).0
    }

    /// Runs the algorithm and additionally returns the run counters.
    pub fn solve_with_record(&self, instance: &QapInstance) -> (SolverResult, RunRecord) {
        match self {
            Solver::Steepest(config) => {
                let out = DescentRunner::run(instance, config, Strategy::Steepest);
                (
                    SolverResult {
                        solution: out.best,
                        fitness: out.best_fitness,
                    },
                    out.record,
                )
            }
            Solver::Greedy(config) => {
                let out = DescentRunner::run(instance, config, Strategy::FirstImprovement);
                (
                    SolverResult {
                        solution: out.best,
                        fitness: out.best_fitness,
                    },
                    out.record,
                )
            }
            Solver::Annealing(config) => {
                let out = AnnealingRunner::run(instance, config);
                (
                    SolverResult {
                        solution: out.best,
                        fitness: out.best_fitness,
                    },
                    out.record,
                )
            }
            Solver::Tabu(config) => {
                let out = TabuRunner::run(instance, config);
                (
                    SolverResult {
                        solution: out.best,
                        fitness: out.best_fitness,
                    },
                    out.record,
                )
            }
            Solver::Constructive(config) => {
                let out = ConstructiveRunner::run(instance, config);
                (
                    SolverResult {
                        solution: out.best,
                        fitness: out.best_fitness,
                    },
                    out.record,
                )
            }
            Solver::Random(config) => {
                let out = SamplingRunner::run(instance, config);
                (
                    SolverResult {
                        solution: out.best,
                        fitness: out.best_fitness,
                    },
                    out.record,
                )
            }
            Solver::RandomWalk(config) => {
                let out = WalkRunner::run(instance, config);
                (
                    SolverResult {
                        solution: out.best,
                        fitness: out.best_fitness,
                    },
                    out.record,
                )
            }
        }
    }

    /// Runs the algorithm and hands the run counters to `sink`.
    pub fn solve_recorded(
        &self,
        instance: &QapInstance,
        sink: &mut dyn MetricsSink,
    ) -> SolverResult {
        let (result, record) = self.solve_with_record(instance);
        sink.record_run(&record);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::{evaluate, is_permutation};
    use crate::random::create_rng;
    use rand::Rng;

    fn test_instance() -> QapInstance {
        let mut rng = create_rng(Some(1));
        let n = 7;
        let flow: Vec<Vec<u64>> = (0..n)
            .map(|_| (0..n).map(|_| rng.random_range(0..50)).collect())
            .collect();
        let distance: Vec<Vec<u64>> = (0..n)
            .map(|_| (0..n).map(|_| rng.random_range(0..50)).collect())
            .collect();
        QapInstance::new(n, flow, distance).unwrap()
    }

    fn all_variants() -> Vec<Solver> {
        vec![
            Solver::Steepest(DescentConfig::default().with_seed(42)),
            Solver::Greedy(DescentConfig::default().with_seed(42)),
            Solver::Annealing(AnnealingConfig::default().with_patience(1).with_seed(42)),
            Solver::Tabu(TabuConfig::default().with_seed(42)),
            Solver::Constructive(ConstructiveConfig::default().with_seed(42)),
            Solver::Random(SamplingConfig::default().with_iterations(100).with_seed(42)),
            Solver::RandomWalk(WalkConfig::default().with_max_iterations(100).with_seed(42)),
        ]
    }

    #[test]
    fn test_every_variant_upholds_the_result_invariant() {
        let instance = test_instance();
        for solver in all_variants() {
            let (result, record) = solver.solve_with_record(&instance);
            assert!(
                is_permutation(&result.solution),
                "{} returned a non-permutation",
                solver.name()
            );
            assert_eq!(
                result.fitness,
                evaluate(&instance, &result.solution),
                "{} broke the fitness invariant",
                solver.name()
            );
            assert_eq!(record.final_fitness, result.fitness);
            assert!(record.evaluations > 0);
        }
    }

    #[test]
    fn test_names_are_distinct() {
        let names: Vec<_> = all_variants().iter().map(|s| s.name()).collect();
        let mut deduped = names.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(names.len(), deduped.len());
    }

    #[test]
    fn test_describe_mentions_parameters() {
        let solver = Solver::Tabu(TabuConfig::default().with_patience(20).with_tenure(8));
        let description = solver.describe();
        assert!(description.contains("20"));
        assert!(description.contains("8"));
    }

    #[test]
    fn test_sink_receives_one_record_per_run() {
        let instance = test_instance();
        let solver = Solver::Random(SamplingConfig::default().with_iterations(10).with_seed(42));

        let mut sink: Vec<RunRecord> = Vec::new();
        let result = solver.solve_recorded(&instance, &mut sink);
        solver.solve_recorded(&instance, &mut sink);

        assert_eq!(sink.len(), 2);
        assert_eq!(sink[0].final_fitness, result.fitness);
    }
}
