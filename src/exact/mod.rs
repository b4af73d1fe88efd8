//! Exact solvers that always return an optimal tour.
//!
//! - [`brute_force`] — Exhaustive permutation search, O(n!)
//! - [`held_karp`] — Held-Karp bitmask dynamic programming (1962), O(n² 2ⁿ)

mod brute_force;
mod held_karp;

pub use brute_force::brute_force;
pub use held_karp::{held_karp, DELEGATE_TO_BRUTE_FORCE, MAX_LOCATIONS};
