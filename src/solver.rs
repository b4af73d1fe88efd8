//! Common solver interface.

use crate::constructive::nearest_neighbor;
use crate::distance::DistanceTable;
use crate::error::Result;
use crate::exact::{brute_force, held_karp};
use crate::models::{Algorithm, Location, Tour};

/// A TSP algorithm that turns a location set, a distance table and a home
/// location into a closed tour.
///
/// Implementations are stateless: every call owns its working data, so a
/// single solver can be shared across threads and the three algorithms can
/// run side by side on the same (read-only) table.
///
/// # Examples
///
/// ```
/// use u_tour::distance::DistanceTable;
/// use u_tour::models::{locations, Algorithm, Location};
/// use u_tour::solver::solver_for;
///
/// let locs = locations(&["A", "B", "C"]);
/// let table = DistanceTable::from_pairs([("A", "B", 1.0), ("A", "C", 2.0), ("B", "C", 2.0)]);
/// let home = Location::from("A");
///
/// for algorithm in Algorithm::ALL {
///     let tour = solver_for(algorithm).solve(&locs, &table, &home).unwrap();
///     assert_eq!(tour.length(), 5.0);
/// }
/// ```
pub trait TspSolver: Send + Sync {
    /// Which algorithm this solver runs.
    fn algorithm(&self) -> Algorithm;

    /// Solves the tour through `locations` starting and ending at `home`.
    fn solve(
        &self,
        locations: &[Location],
        distances: &DistanceTable,
        home: &Location,
    ) -> Result<Tour>;
}

/// Exhaustive search; see [`brute_force`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForceSolver;

/// Held-Karp dynamic programming; see [`held_karp`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HeldKarpSolver;

/// Greedy nearest neighbor; see [`nearest_neighbor`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestNeighborSolver;

impl TspSolver for BruteForceSolver {
    fn algorithm(&self) -> Algorithm {
        Algorithm::BruteForce
    }

    fn solve(
        &self,
        locations: &[Location],
        distances: &DistanceTable,
        home: &Location,
    ) -> Result<Tour> {
        brute_force(locations, distances, home)
    }
}

impl TspSolver for HeldKarpSolver {
    fn algorithm(&self) -> Algorithm {
        Algorithm::HeldKarp
    }

    fn solve(
        &self,
        locations: &[Location],
        distances: &DistanceTable,
        home: &Location,
    ) -> Result<Tour> {
        held_karp(locations, distances, home)
    }
}

impl TspSolver for NearestNeighborSolver {
    fn algorithm(&self) -> Algorithm {
        Algorithm::NearestNeighbor
    }

    fn solve(
        &self,
        locations: &[Location],
        distances: &DistanceTable,
        home: &Location,
    ) -> Result<Tour> {
        nearest_neighbor(locations, distances, home)
    }
}

/// Returns the solver implementing `algorithm`.
pub fn solver_for(algorithm: Algorithm) -> &'static dyn TspSolver {
    match algorithm {
        Algorithm::BruteForce => &BruteForceSolver,
        Algorithm::HeldKarp => &HeldKarpSolver,
        Algorithm::NearestNeighbor => &NearestNeighborSolver,
    }
}
