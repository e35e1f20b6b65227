//! Shared result and run-accounting types.

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Best solution found by a solver together with its fitness.
///
/// At every return point `fitness` equals a from-scratch re-evaluation of
/// `solution` against the instance the solver ran on.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolverResult {
    /// `solution[location] = facility`.
    pub solution: Vec<usize>,
    /// Total flow-weighted distance of `solution`.
    pub fitness: u64,
}

/// Counters a single run fills in while searching.
///
/// The core computes these but never persists them; an external harness
/// consumes them through a [`MetricsSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunRecord {
    /// Fitness of the first solution the run constructed.
    pub initial_fitness: u64,
    /// Fitness of the returned solution.
    pub final_fitness: u64,
    /// Moves applied during the run.
    pub steps: usize,
    /// Delta and full fitness evaluations performed, accepted or not.
    pub evaluations: usize,
    /// Candidate solutions inspected.
    pub candidates: usize,
    /// Wall-clock duration of the run.
    pub elapsed: Duration,
}

/// Receives one record per completed run.
///
/// Implementations (CSV writers, aggregators, experiment harnesses) live
/// outside the core; the `Vec` impl below is enough for tests and simple
/// collection.
pub trait MetricsSink {
    /// Records the counters of one finished run.
    fn record_run(&mut self, record: &RunRecord);
}

impl MetricsSink for Vec<RunRecord> {
    fn record_run(&mut self, record: &RunRecord) {
        self.push(record.clone());
    }
}

/// Counter bundle the runners accumulate while searching.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct Counters {
    pub steps: usize,
    pub evaluations: usize,
    pub candidates: usize,
}

impl Counters {
    /// Finalizes the counters into a [`RunRecord`].
    pub fn into_record(
        self,
        initial_fitness: u64,
        final_fitness: u64,
        elapsed: Duration,
    ) -> RunRecord {
        RunRecord {
            initial_fitness,
            final_fitness,
            steps: self.steps,
            evaluations: self.evaluations,
            candidates: self.candidates,
            elapsed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_sink_collects_records() {
        let record = Counters {
            steps: 3,
            evaluations: 10,
            candidates: 10,
        }
        .into_record(120, 80, Duration::from_millis(5));

        let mut sink: Vec<RunRecord> = Vec::new();
        sink.record_run(&record);
        sink.record_run(&record);

        assert_eq!(sink.len(), 2);
        assert_eq!(sink[0].initial_fitness, 120);
        assert_eq!(sink[0].final_fitness, 80);
        assert_eq!(sink[1].evaluations, 10);
    }
}
