//! Comparison harness configuration.

use serde::{Deserialize, Serialize};

use crate::models::Algorithm;

/// Which algorithms to compare and how.
///
/// # Examples
///
/// ```
/// use u_tour::comparison::ComparisonConfig;
/// use u_tour::models::Algorithm;
///
/// let config = ComparisonConfig::default()
///     .with_algorithms(vec![Algorithm::HeldKarp, Algorithm::NearestNeighbor])
///     .with_parallel(false);
/// assert_eq!(config.algorithms.len(), 2);
/// assert_eq!(config.brute_force_limit, 11);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonConfig {
    /// Algorithms to run, in reporting order.
    pub algorithms: Vec<Algorithm>,
    /// Brute force is skipped above this many distinct locations.
    pub brute_force_limit: usize,
    /// Held-Karp is skipped above this many distinct locations.
    pub held_karp_limit: usize,
    /// Run the algorithms concurrently on the rayon thread pool.
    pub parallel: bool,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            algorithms: Algorithm::ALL.to_vec(),
            brute_force_limit: 11,
            held_karp_limit: 20,
            parallel: true,
        }
    }
}

impl ComparisonConfig {
    /// Sets the algorithms to run.
    pub fn with_algorithms(mut self, algorithms: Vec<Algorithm>) -> Self {
        self.algorithms = algorithms;
        self
    }

    /// Sets the brute force size guard.
    pub fn with_brute_force_limit(mut self, limit: usize) -> Self {
        self.brute_force_limit = limit;
        self
    }

    /// Sets the Held-Karp size guard.
    pub fn with_held_karp_limit(mut self, limit: usize) -> Self {
        self.held_karp_limit = limit;
        self
    }

    /// Enables or disables concurrent execution.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Size guard for `algorithm`, if it has one.
    pub fn limit_for(&self, algorithm: Algorithm) -> Option<usize> {
        match algorithm {
            Algorithm::BruteForce => Some(self.brute_force_limit),
            Algorithm::HeldKarp => Some(self.held_karp_limit),
            Algorithm::NearestNeighbor => None,
        }
    }
}
