//! Tabu search execution engine.
//!
//! # Algorithm
//!
//! 1. Start from a random solution
//! 2. At each iteration:
//!    a. Sample 1/5 of all swap moves without replacement
//!    b. Delta-evaluate each, flag tabu and aspirational moves
//!    c. Keep the best fifth of the sample, pick the first admissible
//!       candidate (non-tabu or aspirational), falling back to the single
//!       lowest-fitness candidate when all are forbidden
//!    d. Apply the move, stamp both created assignments with the tenure
//!    e. Update the global best and the stagnation counter
//! 3. Stop after `patience · n` iterations without a new best

use std::time::Instant;

use super::config::TabuConfig;
use crate::neighborhood::{pair_count, sample_pairs};
use crate::problem::{evaluate, random_solution, swap_fitness, QapInstance};
use crate::random::create_rng;
use crate::solver::{Counters, RunRecord};

/// Fraction of the neighbourhood sampled each iteration (one fifth).
const SAMPLE_DIVISOR: usize = 5;

/// Fraction of the sample retained as the elite shortlist (one fifth).
const ELITE_DIVISOR: usize = 5;

/// Result of a tabu search run.
#[derive(Debug, Clone)]
pub struct TabuResult {
    /// Best solution found.
    pub best: Vec<usize>,
    /// Fitness of the best solution.
    pub best_fitness: u64,
    /// Total iterations executed.
    pub iterations: usize,
    /// Iteration at which the best solution was found.
    pub best_iteration: usize,
    /// Run counters.
    pub record: RunRecord,
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    i: usize,
    j: usize,
    fitness: u64,
    tabu: bool,
    aspiration: bool,
}

/// Tabu search runner.
pub struct TabuRunner;

impl TabuRunner {
    /// Executes tabu search on the given instance.
    pub fn run(instance: &QapInstance, config: &TabuConfig) -> TabuResult {
        let started = Instant::now();
        let mut rng = create_rng(config.seed);
        let n = instance.size();
        let mut counters = Counters::default();

        let tenure = config.tenure.unwrap_or(n / 2).max(1);
        let patience_cap = config.patience * n;
        let sample_size = (pair_count(n) / SAMPLE_DIVISOR).max(1);

        let mut current = random_solution(n, &mut rng);
        let mut current_fitness = evaluate(instance, &current);
        counters.evaluations += 1;
        let initial_fitness = current_fitness;

        let mut best = current.clone();
        let mut best_fitness = current_fitness;
        let mut best_iteration = 0usize;

        // expiry[location * n + facility]: placing `facility` at
        // `location` is forbidden while expiry >= current iteration.
        let mut expiry = vec![0usize; n * n];

        let mut iteration = 0usize;
        let mut no_improvement = 0usize;

        while no_improvement < patience_cap {
            iteration += 1;

            let mut candidates: Vec<Candidate> = sample_pairs(n, sample_size, &mut rng)
                .into_iter()
                .map(|(i, j)| {
                    let fitness = swap_fitness(instance, &current, current_fitness, i, j);
                    counters.evaluations += 1;
                    counters.candidates += 1;
                    Candidate {
                        i,
                        j,
                        fitness,
                        tabu: move_is_tabu(&expiry, n, &current, i, j, iteration),
                        aspiration: fitness < best_fitness,
                    }
                })
                .collect();

            candidates.sort_by_key(|c| c.fitness);
            candidates.truncate((candidates.len() / ELITE_DIVISOR).max(1));

            // First admissible elite candidate; all-tabu shortlists fall
            // back to the lowest-fitness one regardless of status.
            let chosen = candidates
                .iter()
                .copied()
                .find(|c| !c.tabu || c.aspiration)
                .unwrap_or(candidates[0]);

            current.swap(chosen.i, chosen.j);
            current_fitness = chosen.fitness;
            counters.steps += 1;

            expiry[chosen.i * n + current[chosen.i]] = iteration + tenure;
            expiry[chosen.j * n + current[chosen.j]] = iteration + tenure;

            if current_fitness < best_fitness {
                best.copy_from_slice(&current);
                best_fitness = current_fitness;
                best_iteration = iteration;
                no_improvement = 0;
            } else {
                no_improvement += 1;
            }
        }

        TabuResult {
            record: counters.into_record(initial_fitness, best_fitness, started.elapsed()),
            best,
            best_fitness,
            iterations: iteration,
            best_iteration,
        }
    }
}

/// A swap is tabu when either (location, facility) assignment it would
/// create is still under tenure at the given iteration.
fn move_is_tabu(
    expiry: &[usize],
    n: usize,
    solution: &[usize],
    i: usize,
    j: usize,
    iteration: usize,
) -> bool {
    expiry[i * n + solution[j]] >= iteration || expiry[j * n + solution[i]] >= iteration
}
