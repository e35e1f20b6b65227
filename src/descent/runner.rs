//! Descent execution loop.

use std::time::Instant;

use super::config::DescentConfig;
use crate::problem::{evaluate, random_solution, swap_fitness, QapInstance};
use crate::random::create_rng;
use crate::solver::{Counters, RunRecord};

/// Move selection strategy over the swap neighbourhood.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Scan every pair, apply the single best strictly improving move.
    Steepest,
    /// Apply the first strictly improving move in lexicographic pair order.
    FirstImprovement,
}

/// Result of a descent run.
#[derive(Debug, Clone)]
pub struct DescentResult {
    /// Best solution across all restarts.
    pub best: Vec<usize>,
    /// Fitness of the best solution.
    pub best_fitness: u64,
    /// Whether every restart ended at a verified local optimum rather
    /// than at the iteration cap.
    pub converged: bool,
    /// Run counters.
    pub record: RunRecord,
}

/// Descent runner for both strategies.
pub struct DescentRunner;

impl DescentRunner {
    /// Runs descent from `config.restarts` fresh random solutions and
    /// returns the best result seen.
    pub fn run(
        instance: &QapInstance,
        config: &DescentConfig,
        strategy: Strategy,
    ) -> DescentResult {
        let started = Instant::now();
        let mut rng = create_rng(config.seed);
        let n = instance.size();
        let mut counters = Counters::default();

        // A zero restart budget still yields a well-defined result: one
        // evaluated random solution, unrefined.
        if config.restarts == 0 {
            let solution = random_solution(n, &mut rng);
            let fitness = evaluate(instance, &solution);
            counters.evaluations += 1;
            return DescentResult {
                record: counters.into_record(fitness, fitness, started.elapsed()),
                best: solution,
                best_fitness: fitness,
                converged: false,
            };
        }

        let mut best: Option<(Vec<usize>, u64)> = None;
        let mut initial_fitness = 0u64;
        let mut converged = true;

        for restart in 0..config.restarts {
            let start = random_solution(n, &mut rng);
            let start_fitness = evaluate(instance, &start);
            counters.evaluations += 1;
            if restart == 0 {
                initial_fitness = start_fitness;
            }

            let (solution, fitness, local_optimum) =
                descend(instance, start, start_fitness, config, strategy, &mut counters);
            converged &= local_optimum;

            if best.as_ref().is_none_or(|(_, f)| fitness < *f) {
                best = Some((solution, fitness));
            }
        }

        let (best, best_fitness) = best.expect("at least one restart ran");
        DescentResult {
            record: counters.into_record(initial_fitness, best_fitness, started.elapsed()),
            best,
            best_fitness,
            converged,
        }
    }

    /// Refines a given start solution with a single descent run, used to
    /// polish constructive or sampled seeds. The start must be a valid
    /// permutation of `0..n`.
    pub fn refine(
        instance: &QapInstance,
        start: Vec<usize>,
        config: &DescentConfig,
        strategy: Strategy,
    ) -> DescentResult {
        let started = Instant::now();
        let mut counters = Counters::default();

        let start_fitness = evaluate(instance, &start);
        counters.evaluations += 1;

        let (best, best_fitness, local_optimum) =
            descend(instance, start, start_fitness, config, strategy, &mut counters);

        DescentResult {
            record: counters.into_record(start_fitness, best_fitness, started.elapsed()),
            best,
            best_fitness,
            converged: local_optimum,
        }
    }
}

/// Iterates strictly improving moves until a local optimum or the move
/// cap. Returns the final solution, its fitness, and whether a local
/// optimum was reached.
fn descend(
    instance: &QapInstance,
    mut current: Vec<usize>,
    mut current_fitness: u64,
    config: &DescentConfig,
    strategy: Strategy,
    counters: &mut Counters,
) -> (Vec<usize>, u64, bool) {
    for _ in 0..config.max_iterations {
        let improving = match strategy {
            Strategy::Steepest => best_move(instance, &current, current_fitness, counters),
            Strategy::FirstImprovement => first_move(instance, &current, current_fitness, counters),
        };
        match improving {
            Some((i, j, fitness)) => {
                current.swap(i, j);
                current_fitness = fitness;
                counters.steps += 1;
            }
            None => return (current, current_fitness, true),
        }
    }
    (current, current_fitness, false)
}

/// Full neighbourhood scan; the single move with the lowest resulting
/// fitness, if it strictly improves on the current one.
fn best_move(
    instance: &QapInstance,
    solution: &[usize],
    current_fitness: u64,
    counters: &mut Counters,
) -> Option<(usize, usize, u64)> {
    let n = instance.size();
    let mut best: Option<(usize, usize, u64)> = None;
    let mut best_fitness = current_fitness;

    for i in 0..n - 1 {
        for j in (i + 1)..n {
            let fitness = swap_fitness(instance, solution, current_fitness, i, j);
            counters.evaluations += 1;
            counters.candidates += 1;
            if fitness < best_fitness {
                best_fitness = fitness;
                best = Some((i, j, fitness));
            }
        }
    }
    best
}

/// Lexicographic scan; the first strictly improving move found.
fn first_move(
    instance: &QapInstance,
    solution: &[usize],
    current_fitness: u64,
    counters: &mut Counters,
) -> Option<(usize, usize, u64)> {
    let n = instance.size();
    for i in 0..n - 1 {
        for j in (i + 1)..n {
            let fitness = swap_fitness(instance, solution, current_fitness, i, j);
            counters.evaluations += 1;
            counters.candidates += 1;
            if fitness < current_fitness {
                return Some((i, j, fitness));
            }
        }
    }
    None
}
