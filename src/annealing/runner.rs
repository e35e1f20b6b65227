//! SA execution loop.

use std::time::Instant;

use super::config::AnnealingConfig;
use crate::neighborhood::{pair_count, random_pair};
use crate::problem::{evaluate, random_solution, swap_delta, QapInstance};
use crate::random::create_rng;
use crate::solver::{Counters, RunRecord};
use rand::Rng;

/// Swap moves sampled to calibrate the initial temperature.
const TEMPERATURE_SAMPLES: usize = 100;

/// Target acceptance probability for an average worsening move at the
/// start of the run.
const WARMUP_ACCEPTANCE: f64 = 0.95;

/// Initial temperature when no sampled move worsens the start solution.
const FALLBACK_TEMPERATURE: f64 = 10_000.0;

/// Result of a simulated annealing run.
#[derive(Debug, Clone)]
pub struct AnnealingResult {
    /// Best solution found.
    pub best: Vec<usize>,
    /// Fitness of the best solution.
    pub best_fitness: u64,
    /// Calibrated initial temperature.
    pub initial_temperature: f64,
    /// Temperature when the run stopped.
    pub final_temperature: f64,
    /// Accepted moves, improving or not.
    pub accepted_moves: usize,
    /// Run counters.
    pub record: RunRecord,
}

/// Simulated annealing runner.
pub struct AnnealingRunner;

impl AnnealingRunner {
    /// Runs simulated annealing on the given instance.
    pub fn run(instance: &QapInstance, config: &AnnealingConfig) -> AnnealingResult {
        config.validate().expect("invalid AnnealingConfig");

        let started = Instant::now();
        let mut rng = create_rng(config.seed);
        let n = instance.size();
        let mut counters = Counters::default();

        let mut current = random_solution(n, &mut rng);
        let mut current_fitness = evaluate(instance, &current);
        counters.evaluations += 1;
        let initial_fitness = current_fitness;

        let mut best = current.clone();
        let mut best_fitness = current_fitness;

        let initial_temperature = calibrate_temperature(instance, &current, &mut rng, &mut counters);
        let mut temperature = initial_temperature;
        let floor = -1.0 / config.acceptance_probability.ln();
        let patience_cap = config.patience * pair_count(n);

        let mut no_improvement = 0usize;
        let mut accepted_moves = 0usize;

        // The run persists past the cooling floor until it also exhausts
        // its improvement patience.
        while temperature > floor || no_improvement < patience_cap {
            let (i, j) = random_pair(n, &mut rng);
            let delta = swap_delta(instance, &current, i, j);
            counters.evaluations += 1;
            counters.candidates += 1;

            let accept = if delta < 0 {
                true
            } else if delta > 0 {
                rng.random_range(0.0..1.0) < (-(delta as f64) / temperature).exp()
            } else {
                // A zero-delta move is never accepted stochastically.
                false
            };

            if accept {
                current.swap(i, j);
                current_fitness = (current_fitness as i64 + delta) as u64;
                counters.steps += 1;
                accepted_moves += 1;

                if current_fitness < best_fitness {
                    best.copy_from_slice(&current);
                    best_fitness = current_fitness;
                    no_improvement = 0;
                } else {
                    no_improvement += 1;
                }
            } else {
                no_improvement += 1;
            }

            // Temperature decays every iteration regardless of the
            // acceptance outcome.
            temperature *= config.alpha;
        }

        AnnealingResult {
            record: counters.into_record(initial_fitness, best_fitness, started.elapsed()),
            best,
            best_fitness,
            initial_temperature,
            final_temperature: temperature,
            accepted_moves,
        }
    }
}

/// Samples random swap moves from the start solution and averages the
/// strictly positive fitness deltas; the initial temperature is set so an
/// average worsening move is accepted with probability
/// [`WARMUP_ACCEPTANCE`].
fn calibrate_temperature<R: Rng + ?Sized>(
    instance: &QapInstance,
    solution: &[usize],
    rng: &mut R,
    counters: &mut Counters,
) -> f64 {
    let n = instance.size();
    let mut positive_total = 0.0f64;
    let mut worsening = 0usize;

    for _ in 0..TEMPERATURE_SAMPLES {
        let (i, j) = random_pair(n, rng);
        let delta = swap_delta(instance, solution, i, j);
        counters.evaluations += 1;
        if delta > 0 {
            positive_total += delta as f64;
            worsening += 1;
        }
    }

    if worsening == 0 {
        return FALLBACK_TEMPERATURE;
    }
    let average_delta = positive_total / worsening as f64;
    -average_delta / WARMUP_ACCEPTANCE.ln()
}
