//! # u-tour
//!
//! Traveling salesman solvers over a small set of named locations: an
//! exhaustive search, Held-Karp dynamic programming, and the greedy
//! nearest-neighbor heuristic. All three take the same inputs and return a
//! closed tour through a home location, so callers can run them side by
//! side and compare.
//!
//! ## Modules
//!
//! - [`models`]: Domain types (Location, Tour, Algorithm, TspInstance)
//! - [`distance`]: Sparse name-keyed distance table and dense matrix
//! - [`validation`]: Closed-tour validation
//! - [`exact`]: Exact solvers (brute force, Held-Karp)
//! - [`constructive`]: Constructive heuristics (nearest neighbor)
//! - [`solver`]: The common [`TspSolver`] interface
//! - [`comparison`]: Timed multi-algorithm comparison with size guards
//! - [`scenario`]: Random scenario generation
//!
//! ## Example
//!
//! ```
//! use u_tour::{brute_force, held_karp, nearest_neighbor, DistanceTable, Location};
//! use u_tour::models::locations;
//!
//! let locs = locations(&["A", "B", "C", "D", "E"]);
//! let table = DistanceTable::from_pairs([
//!     ("A", "B", 10.0), ("A", "C", 20.0), ("A", "D", 30.0), ("A", "E", 40.0),
//!     ("B", "C", 10.0), ("B", "D", 25.0), ("B", "E", 30.0),
//!     ("C", "D", 10.0), ("C", "E", 20.0), ("D", "E", 10.0),
//! ]);
//! let home = Location::from("A");
//!
//! let exact = held_karp(&locs, &table, &home)?;
//! assert_eq!(exact.length(), 80.0);
//! assert_eq!(brute_force(&locs, &table, &home)?.length(), 80.0);
//! assert!(nearest_neighbor(&locs, &table, &home)?.length() >= 80.0);
//! # Ok::<(), u_tour::Error>(())
//! ```

pub mod comparison;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod exact;
pub mod models;
pub mod scenario;
pub mod solver;
pub mod validation;

pub use constructive::nearest_neighbor;
pub use distance::DistanceTable;
pub use error::{Error, Result, RouteViolation};
pub use exact::{brute_force, held_karp};
pub use models::{Algorithm, Location, Tour};
pub use solver::TspSolver;
