//! Solver algorithm identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the three available TSP algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// Exhaustive permutation search, O(n!).
    BruteForce,
    /// Held-Karp dynamic programming, O(n² 2ⁿ).
    HeldKarp,
    /// Greedy nearest-neighbor construction, O(n²).
    NearestNeighbor,
}

impl Algorithm {
    /// All algorithms, exact ones first.
    pub const ALL: [Algorithm; 3] = [
        Algorithm::BruteForce,
        Algorithm::HeldKarp,
        Algorithm::NearestNeighbor,
    ];

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::BruteForce => "Brute Force",
            Algorithm::HeldKarp => "Dynamic Programming",
            Algorithm::NearestNeighbor => "Nearest Neighbor",
        }
    }

    /// Returns `true` if the algorithm always finds an optimal tour.
    pub fn is_exact(&self) -> bool {
        !matches!(self, Algorithm::NearestNeighbor)
    }

    /// Asymptotic time complexity.
    pub fn complexity(&self) -> &'static str {
        match self {
            Algorithm::BruteForce => "O(n!)",
            Algorithm::HeldKarp => "O(n^2 2^n)",
            Algorithm::NearestNeighbor => "O(n^2)",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
