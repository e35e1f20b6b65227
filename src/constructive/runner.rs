//! Greedy insertion loop.

use std::time::Instant;

use super::config::ConstructiveConfig;
use crate::problem::{evaluate, random_solution, QapInstance};
use crate::random::create_rng;
use crate::solver::{Counters, RunRecord};
use rand::Rng;

const UNPLACED: usize = usize::MAX;

/// Result of a constructive run.
#[derive(Debug, Clone)]
pub struct ConstructiveResult {
    /// Best constructed solution.
    pub best: Vec<usize>,
    /// Fitness of the best solution.
    pub best_fitness: u64,
    /// Run counters.
    pub record: RunRecord,
}

/// Nearest-neighbour construction runner.
pub struct ConstructiveRunner;

impl ConstructiveRunner {
    /// Builds `config.random_starts` solutions and returns the best one.
    pub fn run(instance: &QapInstance, config: &ConstructiveConfig) -> ConstructiveResult {
        let started = Instant::now();
        let mut rng = create_rng(config.seed);
        let n = instance.size();
        let mut counters = Counters::default();

        // A zero start budget still yields a well-defined result: one
        // evaluated random solution.
        if config.random_starts == 0 {
            let solution = random_solution(n, &mut rng);
            let fitness = evaluate(instance, &solution);
            counters.evaluations += 1;
            return ConstructiveResult {
                record: counters.into_record(fitness, fitness, started.elapsed()),
                best: solution,
                best_fitness: fitness,
            };
        }

        let mut best: Option<(Vec<usize>, u64)> = None;
        let mut initial_fitness = 0u64;

        for start in 0..config.random_starts {
            let solution = construct(instance, &mut rng);
            counters.steps += n;
            let fitness = evaluate(instance, &solution);
            counters.evaluations += 1;
            counters.candidates += 1;
            if start == 0 {
                initial_fitness = fitness;
            }
            if best.as_ref().is_none_or(|(_, f)| fitness < *f) {
                best = Some((solution, fitness));
            }
        }

        let (best, best_fitness) = best.expect("at least one start ran");
        ConstructiveResult {
            record: counters.into_record(initial_fitness, best_fitness, started.elapsed()),
            best,
            best_fitness,
        }
    }
}

/// Builds one solution by greedy insertion.
///
/// The first facility and its location are the only random choices.
/// Afterwards the unplaced facility with the strongest flow affinity to
/// the last-placed one (ties towards larger total outgoing flow) goes to
/// the free location minimizing the partial cost against everything
/// already placed, both flow directions counted.
pub fn construct<R: Rng + ?Sized>(instance: &QapInstance, rng: &mut R) -> Vec<usize> {
    let n = instance.size();

    // assignment[facility] = location while building; flipped into the
    // location-indexed form at the end.
    let mut assignment = vec![UNPLACED; n];
    let mut location_used = vec![false; n];

    // Unplaced facilities, strongest total outgoing flow first. Affinity
    // ties resolve towards the front of this order.
    let mut unplaced: Vec<usize> = (0..n).collect();
    unplaced.sort_by(|&a, &b| total_outflow(instance, b).cmp(&total_outflow(instance, a)));

    let first = unplaced.remove(rng.random_range(0..n));
    let first_location = rng.random_range(0..n);
    assignment[first] = first_location;
    location_used[first_location] = true;
    let mut last = first;

    while !unplaced.is_empty() {
        let mut pick = 0usize;
        for (index, &facility) in unplaced.iter().enumerate() {
            if affinity(instance, facility, last) > affinity(instance, unplaced[pick], last) {
                pick = index;
            }
        }
        let facility = unplaced.remove(pick);

        let location = (0..n)
            .filter(|&l| !location_used[l])
            .min_by_key(|&l| partial_cost(instance, &assignment, facility, l))
            .expect("a free location remains for every unplaced facility");

        assignment[facility] = location;
        location_used[location] = true;
        last = facility;
    }

    let mut solution = vec![0usize; n];
    for (facility, &location) in assignment.iter().enumerate() {
        solution[location] = facility;
    }
    solution
}

/// Total flow leaving a facility.
fn total_outflow(instance: &QapInstance, facility: usize) -> u64 {
    (0..instance.size()).map(|k| instance.flow(facility, k)).sum()
}

/// Flow between two facilities, both directions.
fn affinity(instance: &QapInstance, facility: usize, other: usize) -> u64 {
    instance.flow(facility, other) + instance.flow(other, facility)
}

/// Cost of putting `facility` at `location` against the already placed
/// facilities.
fn partial_cost(
    instance: &QapInstance,
    assignment: &[usize],
    facility: usize,
    location: usize,
) -> u64 {
    let mut cost = 0u64;
    for (other, &placed_at) in assignment.iter().enumerate() {
        if placed_at == UNPLACED {
            continue;
        }
        cost += instance.flow(facility, other) * instance.distance(location, placed_at);
        cost += instance.flow(other, facility) * instance.distance(placed_at, location);
    }
    cost
}
