//! Held-Karp dynamic programming over visited-set bitmasks.
//!
//! # Algorithm
//!
//! Each location gets an index `0..n` (the supplied order, home included).
//! A state `(mask, end)` stands for "left home, visited exactly the
//! indices set in `mask`, and stopped at `end`"; home is in every mask.
//! Its value is the cheapest such path, accumulated from home outward:
//!
//! ```text
//! g({home, j}, j) = d(home, j)
//! g(mask, end)    = min over prev ∈ mask \ {home, end} of g(mask \ {end}, prev) + d(prev, end)
//! ```
//!
//! and the optimum closes the full set: `min over end of g(full, end) +
//! d(end, home)`. Masks are filled in increasing numeric order, so each
//! state only reads states that are already final. The minimizing `prev`
//! is kept per state (first in index order on ties) and the route is
//! rebuilt by walking it back from the best closing `end`.
//!
//! Costs are summed in travel order, the same order [`brute_force`] and
//! [`DistanceMatrix::tour_length`] use, so the optimum matches both
//! exactly, not just up to rounding.
//!
//! States live in two flat arenas indexed by `mask * n + end`.
//!
//! # Complexity
//!
//! O(n² · 2ⁿ) time, O(n · 2ⁿ) space.
//!
//! # Reference
//!
//! Held, M., Karp, R.M. (1962). "A dynamic programming approach to
//! sequencing problems", *J. SIAM* 10(1), 196-210.

use log::{debug, trace};

use crate::distance::{DistanceMatrix, DistanceTable};
use crate::error::{Error, Result};
use crate::models::{Location, Tour, TspInstance};
use crate::validation::validate_route_against;

use super::brute_force;

/// At or below this many locations the search is handed to
/// [`brute_force`].
pub const DELEGATE_TO_BRUTE_FORCE: usize = 3;

/// Largest number of distinct locations [`held_karp`] accepts.
///
/// The state arenas hold `n · 2ⁿ` entries; past this they no longer fit in
/// memory on any realistic machine.
pub const MAX_LOCATIONS: usize = 24;

const NO_PARENT: u8 = u8::MAX;

/// Finds an optimal tour with the Held-Karp recurrence.
///
/// Inputs with at most [`DELEGATE_TO_BRUTE_FORCE`] distinct locations are
/// solved by [`brute_force`] and return exactly its result.
///
/// # Errors
///
/// - [`Error::UndefinedDistance`](crate::Error::UndefinedDistance) if any
///   pair of locations is absent from `distances`.
/// - [`Error::UnknownHome`](crate::Error::UnknownHome) if `home` is not in
///   `locations`.
/// - [`Error::TooManyLocations`](crate::Error::TooManyLocations) if there
///   are more than [`MAX_LOCATIONS`] distinct locations.
///
/// # Examples
///
/// ```
/// use u_tour::distance::DistanceTable;
/// use u_tour::exact::held_karp;
/// use u_tour::models::{locations, Location};
///
/// let locs = locations(&["A", "B", "C", "D"]);
/// let table = DistanceTable::from_pairs([
///     ("A", "B", 10.0), ("A", "C", 15.0), ("A", "D", 20.0),
///     ("B", "C", 35.0), ("B", "D", 25.0), ("C", "D", 30.0),
/// ]);
///
/// let tour = held_karp(&locs, &table, &Location::from("A")).unwrap();
/// assert_eq!(tour.length(), 80.0);
/// assert_eq!(tour.route().len(), 5);
/// ```
pub fn held_karp(
    locations: &[Location],
    distances: &DistanceTable,
    home: &Location,
) -> Result<Tour> {
    let instance = TspInstance::new(locations, home)?;
    if instance.len() <= DELEGATE_TO_BRUTE_FORCE {
        debug!(
            "held-karp: {} locations, delegating to brute force",
            instance.len()
        );
        return brute_force(locations, distances, home);
    }

    if instance.len() > MAX_LOCATIONS {
        return Err(Error::TooManyLocations {
            count: instance.len(),
            max: MAX_LOCATIONS,
        });
    }

    debug!("held-karp: {} locations", instance.len());
    let dm = DistanceMatrix::from_table(instance.locations(), distances)?;
    let order = solve_indices(&dm, instance.home_index());
    let length = dm.tour_length(&order);

    let route: Vec<Location> = order
        .iter()
        .map(|&i| instance.locations()[i].clone())
        .collect();

    validate_route_against(&route, instance.home(), instance.locations())?;
    debug!("held-karp: optimal length {length}");
    Ok(Tour::new(route, length))
}

/// Runs the recurrence on a dense matrix and returns the closed index
/// route `home, …, home`. `dm.size()` must not exceed [`MAX_LOCATIONS`].
fn solve_indices(dm: &DistanceMatrix, home: usize) -> Vec<usize> {
    let n = dm.size();
    if n < 2 {
        return vec![home, home];
    }

    let full = (1usize << n) - 1;
    let home_bit = 1usize << home;
    let states = (full + 1) * n;
    trace!("held-karp: {states} states");

    let mut cost = vec![f64::INFINITY; states];
    let mut parent = vec![NO_PARENT; states];

    for end in (0..n).filter(|&j| j != home) {
        let state = (home_bit | (1 << end)) * n + end;
        cost[state] = dm.get(home, end);
        parent[state] = home as u8;
    }

    for mask in home_bit..=full {
        if mask & home_bit == 0 || (mask & !home_bit).count_ones() < 2 {
            continue;
        }
        for end in 0..n {
            if end == home || mask & (1 << end) == 0 {
                continue;
            }

            let prev_mask = mask & !(1 << end);
            let mut best = f64::INFINITY;
            let mut best_prev = NO_PARENT;
            for prev in 0..n {
                if prev == home || prev_mask & (1 << prev) == 0 {
                    continue;
                }
                let c = cost[prev_mask * n + prev] + dm.get(prev, end);
                if best_prev == NO_PARENT || c < best {
                    best = c;
                    best_prev = prev as u8;
                }
            }

            cost[mask * n + end] = best;
            parent[mask * n + end] = best_prev;
        }
    }

    let mut best = f64::INFINITY;
    let mut last = NO_PARENT;
    for end in (0..n).filter(|&j| j != home) {
        let c = cost[full * n + end] + dm.get(end, home);
        if last == NO_PARENT || c < best {
            best = c;
            last = end as u8;
        }
    }

    // Walk the parents back to home, then flip into travel order.
    let mut route = Vec::with_capacity(n + 1);
    route.push(home);
    let mut mask = full;
    let mut cur = last as usize;
    while cur != home {
        route.push(cur);
        let prev = parent[mask * n + cur] as usize;
        mask &= !(1 << cur);
        cur = prev;
    }
    route.push(home);
    route.reverse();
    route
}
