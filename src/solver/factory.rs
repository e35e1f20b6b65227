//! Configuration-string solver factory.
//!
//! Format: `kind[:key=value,...]`, e.g. `"tabu:p=20,seed=7"`. Keys are
//! case-insensitive. Unknown keys and out-of-range values fall back to
//! the documented defaults silently; that leniency belongs to this
//! configuration layer, never to the algorithms. An unknown kind is an
//! error.

use super::Solver;
use crate::annealing::AnnealingConfig;
use crate::constructive::ConstructiveConfig;
use crate::descent::DescentConfig;
use crate::sampling::{SamplingConfig, WalkConfig};
use crate::tabu::TabuConfig;

impl Solver {
    /// Builds a solver from a configuration string.
    ///
    /// # Examples
    ///
    /// ```
    /// use qap_solver::solver::Solver;
    ///
    /// let solver = Solver::parse("simanneal:alpha=0.95,p=5,seed=42").unwrap();
    /// assert_eq!(solver.name(), "SimulatedAnnealing");
    ///
    /// assert!(Solver::parse("branchandbound").is_err());
    /// ```
    pub fn parse(spec: &str) -> Result<Solver, String> {
        let (kind, rest) = match spec.split_once(':') {
            Some((kind, rest)) => (kind, rest),
            None => (spec, ""),
        };
        let options = Options::parse(rest);

        match kind.trim().to_ascii_lowercase().as_str() {
            "steepest" => Ok(Solver::Steepest(descent_config(&options))),
            "greedy" => Ok(Solver::Greedy(descent_config(&options))),
            "simanneal" | "annealing" => {
                let mut config = AnnealingConfig::default();
                if let Some(alpha) = options.unit_interval("alpha") {
                    config.alpha = alpha;
                }
                if let Some(p) = options.positive("p") {
                    config.patience = p;
                }
                if let Some(probability) = options.unit_interval("acceptanceprobability") {
                    config.acceptance_probability = probability;
                }
                config.seed = options.seed();
                Ok(Solver::Annealing(config))
            }
            "tabu" => {
                let mut config = TabuConfig::default();
                if let Some(p) = options.positive("p") {
                    config.patience = p;
                }
                if let Some(tenure) = options.positive("tenure") {
                    config.tenure = Some(tenure);
                }
                config.seed = options.seed();
                Ok(Solver::Tabu(config))
            }
            "heuristic" | "nearestneighbor" => {
                let mut config = ConstructiveConfig::default();
                if let Some(starts) = options.positive("randomstarts") {
                    config.random_starts = starts;
                }
                config.seed = options.seed();
                Ok(Solver::Constructive(config))
            }
            "random" => {
                let mut config = SamplingConfig::default();
                if let Some(iterations) = options.positive("iterations") {
                    config.iterations = iterations;
                }
                config.seed = options.seed();
                Ok(Solver::Random(config))
            }
            "randomwalk" => {
                let mut config = WalkConfig::default();
                if let Some(iterations) = options.positive("maxiterations") {
                    config.max_iterations = iterations;
                }
                config.seed = options.seed();
                Ok(Solver::RandomWalk(config))
            }
            other => Err(format!("unknown solver kind: {other}")),
        }
    }
}

fn descent_config(options: &Options) -> DescentConfig {
    let mut config = DescentConfig::default();
    if let Some(iterations) = options.positive("maxiterations") {
        config.max_iterations = iterations;
    }
    if let Some(restarts) = options.positive("randomrestarts") {
        config.restarts = restarts;
    }
    config.seed = options.seed();
    config
}

/// Lowercased key/value pairs from the option tail of a spec string.
struct Options(Vec<(String, String)>);

impl Options {
    fn parse(rest: &str) -> Self {
        let pairs = rest
            .split(',')
            .filter_map(|item| {
                let (key, value) = item.split_once('=')?;
                Some((
                    key.trim().to_ascii_lowercase(),
                    value.trim().to_string(),
                ))
            })
            .collect();
        Options(pairs)
    }

    fn raw(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// A strictly positive integer; anything else falls back to the default.
    fn positive(&self, key: &str) -> Option<usize> {
        self.raw(key)
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|&v| v > 0)
    }

    /// A value strictly inside (0, 1); anything else falls back to the default.
    fn unit_interval(&self, key: &str) -> Option<f64> {
        self.raw(key)
            .and_then(|v| v.parse::<f64>().ok())
            .filter(|&v| v > 0.0 && v < 1.0)
    }

    fn seed(&self) -> Option<u64> {
        self.raw("seed").and_then(|v| v.parse::<u64>().ok())
    }
}
