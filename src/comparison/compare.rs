//! Runs several algorithms on one input and compares their tours.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use log::{info, warn};
use rayon::prelude::*;

use crate::distance::DistanceTable;
use crate::error::Error;
use crate::models::{Algorithm, Location, Tour};
use crate::solver::solver_for;

use super::ComparisonConfig;

/// What happened when one algorithm was run.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The algorithm returned a tour.
    Solved {
        /// The tour found.
        tour: Tour,
        /// Wall-clock time spent in the solver.
        elapsed: Duration,
    },
    /// The algorithm returned an error.
    Failed {
        /// The error returned.
        error: Error,
        /// Wall-clock time spent before failing.
        elapsed: Duration,
    },
    /// The algorithm was not run because the input exceeds its size guard.
    Skipped {
        /// Number of distinct locations in the input.
        locations: usize,
        /// Configured limit for the algorithm.
        limit: usize,
    },
}

impl Outcome {
    /// The tour, if the algorithm solved the input.
    pub fn tour(&self) -> Option<&Tour> {
        match self {
            Outcome::Solved { tour, .. } => Some(tour),
            _ => None,
        }
    }

    /// Time spent in the solver; `None` if it was skipped.
    pub fn elapsed(&self) -> Option<Duration> {
        match self {
            Outcome::Solved { elapsed, .. } | Outcome::Failed { elapsed, .. } => Some(*elapsed),
            Outcome::Skipped { .. } => None,
        }
    }
}

/// One algorithm and its outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct AlgorithmRun {
    /// Algorithm that was run.
    pub algorithm: Algorithm,
    /// Its outcome.
    pub outcome: Outcome,
}

/// Results of running several algorithms on the same input.
#[derive(Debug, Clone, Default)]
pub struct Comparison {
    runs: Vec<AlgorithmRun>,
}

impl Comparison {
    /// All runs in configured order.
    pub fn runs(&self) -> &[AlgorithmRun] {
        &self.runs
    }

    /// The run for `algorithm`, if it was configured.
    pub fn get(&self, algorithm: Algorithm) -> Option<&AlgorithmRun> {
        self.runs.iter().find(|r| r.algorithm == algorithm)
    }

    /// The tour found by `algorithm`, if it solved the input.
    pub fn tour(&self, algorithm: Algorithm) -> Option<&Tour> {
        self.get(algorithm).and_then(|r| r.outcome.tour())
    }

    /// The algorithm with the shortest tour. Earlier runs win ties.
    pub fn shortest(&self) -> Option<(Algorithm, &Tour)> {
        let mut best: Option<(Algorithm, &Tour)> = None;
        for run in &self.runs {
            if let Some(tour) = run.outcome.tour() {
                if best.map_or(true, |(_, b)| tour.length() < b.length()) {
                    best = Some((run.algorithm, tour));
                }
            }
        }
        best
    }

    /// Ratio of `algorithm`'s tour length to the best exact tour length.
    ///
    /// `None` if `algorithm` or every exact algorithm failed or was
    /// skipped, or the optimum is zero.
    pub fn optimality_ratio(&self, algorithm: Algorithm) -> Option<f64> {
        let optimum = self
            .runs
            .iter()
            .filter(|r| r.algorithm.is_exact())
            .filter_map(|r| r.outcome.tour())
            .map(Tour::length)
            .min_by(f64::total_cmp)?;
        if optimum <= 0.0 {
            return None;
        }
        self.tour(algorithm).map(|t| t.length() / optimum)
    }
}

/// Runs every algorithm in `config` on the same input.
///
/// A failing algorithm does not stop the others; its error is recorded in
/// its [`Outcome`]. Algorithms whose size guard is exceeded are skipped.
///
/// # Examples
///
/// ```
/// use u_tour::comparison::{compare, ComparisonConfig};
/// use u_tour::distance::DistanceTable;
/// use u_tour::models::{locations, Algorithm, Location};
///
/// let locs = locations(&["A", "B", "C", "D"]);
/// let table = DistanceTable::from_pairs([
///     ("A", "B", 10.0), ("A", "C", 15.0), ("A", "D", 20.0),
///     ("B", "C", 35.0), ("B", "D", 25.0), ("C", "D", 30.0),
/// ]);
///
/// let comparison = compare(&locs, &table, &Location::from("A"), &ComparisonConfig::default());
/// let (algorithm, tour) = comparison.shortest().unwrap();
/// assert_eq!(algorithm, Algorithm::BruteForce);
/// assert_eq!(tour.length(), 80.0);
/// ```
pub fn compare(
    locations: &[Location],
    distances: &DistanceTable,
    home: &Location,
    config: &ComparisonConfig,
) -> Comparison {
    let count = locations.iter().collect::<HashSet<_>>().len();
    let run = |&algorithm: &Algorithm| AlgorithmRun {
        algorithm,
        outcome: run_one(algorithm, count, locations, distances, home, config),
    };

    let runs: Vec<AlgorithmRun> = if config.parallel {
        config.algorithms.par_iter().map(run).collect()
    } else {
        config.algorithms.iter().map(run).collect()
    };

    Comparison { runs }
}

fn run_one(
    algorithm: Algorithm,
    count: usize,
    locations: &[Location],
    distances: &DistanceTable,
    home: &Location,
    config: &ComparisonConfig,
) -> Outcome {
    if let Some(limit) = config.limit_for(algorithm) {
        if count > limit {
            warn!("{algorithm}: skipped, {count} locations exceeds limit of {limit}");
            return Outcome::Skipped {
                locations: count,
                limit,
            };
        }
    }

    let start = Instant::now();
    let result = solver_for(algorithm).solve(locations, distances, home);
    let elapsed = start.elapsed();

    match result {
        Ok(tour) => {
            info!(
                "{algorithm}: distance={:.2}, time={:.6}s",
                tour.length(),
                elapsed.as_secs_f64()
            );
            Outcome::Solved { tour, elapsed }
        }
        Err(error) => {
            warn!("{algorithm}: failed: {error}");
            Outcome::Failed { error, elapsed }
        }
    }
}
