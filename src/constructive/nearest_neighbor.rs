//! Nearest-neighbor constructive heuristic.
//!
//! Builds the tour greedily: starting from home, always step to the nearest
//! unvisited location, then return home once everything is visited.
//!
//! # Complexity
//!
//! O(n²) where n = number of locations.
//!
//! # Reference
//!
//! This is the simplest constructive heuristic for the TSP. It always
//! yields a valid tour but carries no optimality guarantee; tours are
//! typically 15-25% above optimal.

use log::debug;

use crate::distance::DistanceTable;
use crate::error::Result;
use crate::models::{Location, Tour, TspInstance};
use crate::validation::validate_route_against;

/// Constructs a tour using the nearest-neighbor heuristic.
///
/// Remaining locations are scanned in the order they were supplied; on a
/// tie the first one scanned wins.
///
/// # Errors
///
/// - [`Error::UndefinedDistance`](crate::Error::UndefinedDistance) if the
///   pair from the current location to a remaining one (or the final pair
///   back home) is absent from `distances`.
/// - [`Error::UnknownHome`](crate::Error::UnknownHome) if `home` is not in
///   `locations`.
///
/// # Examples
///
/// ```
/// use u_tour::constructive::nearest_neighbor;
/// use u_tour::distance::DistanceTable;
/// use u_tour::models::{locations, Location};
///
/// let locs = locations(&["Depot", "Far", "Near"]);
/// let table = DistanceTable::from_pairs([
///     ("Depot", "Far", 10.0),
///     ("Depot", "Near", 1.0),
///     ("Far", "Near", 9.0),
/// ]);
///
/// let tour = nearest_neighbor(&locs, &table, &Location::from("Depot")).unwrap();
/// let names: Vec<_> = tour.route().iter().map(|l| l.as_str()).collect();
/// assert_eq!(names, ["Depot", "Near", "Far", "Depot"]);
/// assert_eq!(tour.length(), 20.0);
/// ```
pub fn nearest_neighbor(
    locations: &[Location],
    distances: &DistanceTable,
    home: &Location,
) -> Result<Tour> {
    let instance = TspInstance::new(locations, home)?;
    let home = instance.home();
    debug!("nearest neighbor: {} locations", instance.len());

    let mut unvisited: Vec<&Location> = instance.others().collect();
    let mut route = Vec::with_capacity(instance.len() + 1);
    route.push(home.clone());
    let mut current = home;

    while !unvisited.is_empty() {
        // Find nearest unvisited location
        let mut best: Option<(usize, f64)> = None;
        for (i, &candidate) in unvisited.iter().enumerate() {
            let d = distances.distance(current, candidate)?;
            if best.map_or(true, |(_, b)| d < b) {
                best = Some((i, d));
            }
        }

        let Some((i, _)) = best else { break };
        let next = unvisited.remove(i);
        route.push(next.clone());
        current = next;
    }

    route.push(home.clone());
    let length = distances.route_length(&route)?;

    validate_route_against(&route, home, instance.locations())?;
    debug!("nearest neighbor: length {length}");
    Ok(Tour::new(route, length))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::models::locations;

    fn loc(name: &str) -> Location {
        Location::from(name)
    }

    fn line_table() -> DistanceTable {
        // Four points on a line at 0, 1, 2, 3.
        DistanceTable::from_pairs([
            ("D", "1", 1.0),
            ("D", "2", 2.0),
            ("D", "3", 3.0),
            ("1", "2", 1.0),
            ("1", "3", 2.0),
            ("2", "3", 1.0),
        ])
    }

    #[test]
    fn test_nn_walks_the_line() {
        let tour = nearest_neighbor(&locations(&["D", "3", "1", "2"]), &line_table(), &loc("D"))
            .expect("solvable");
        assert_eq!(tour.route(), locations(&["D", "1", "2", "3", "D"]).as_slice());
        // 1 + 1 + 1 + 3
        assert_eq!(tour.length(), 6.0);
    }

    #[test]
    fn test_nn_tie_takes_first_supplied() {
        let table = DistanceTable::from_pairs([("H", "X", 5.0), ("H", "Y", 5.0), ("X", "Y", 1.0)]);
        let tour = nearest_neighbor(&locations(&["H", "Y", "X"]), &table, &loc("H"))
            .expect("solvable");
        assert_eq!(tour.route(), locations(&["H", "Y", "X", "H"]).as_slice());

        let tour = nearest_neighbor(&locations(&["H", "X", "Y"]), &table, &loc("H"))
            .expect("solvable");
        assert_eq!(tour.route(), locations(&["H", "X", "Y", "H"]).as_slice());
    }

    #[test]
    fn test_nn_home_only() {
        let tour = nearest_neighbor(&locations(&["H"]), &DistanceTable::new(), &loc("H"))
            .expect("solvable");
        assert_eq!(tour.route(), locations(&["H", "H"]).as_slice());
        assert_eq!(tour.length(), 0.0);
    }

    #[test]
    fn test_nn_total_matches_route() {
        let table = line_table();
        let tour = nearest_neighbor(&locations(&["D", "1", "2", "3"]), &table, &loc("D"))
            .expect("solvable");
        assert_eq!(table.route_length(tour.route()), Ok(tour.length()));
    }

    #[test]
    fn test_nn_missing_distance() {
        let table = DistanceTable::from_pairs([("A", "B", 10.0), ("B", "C", 15.0)]);
        let err = nearest_neighbor(&locations(&["A", "B", "C"]), &table, &loc("A")).unwrap_err();
        assert!(err.is_undefined_between(&loc("A"), &loc("C")));
    }

    #[test]
    fn test_nn_unknown_home() {
        let err =
            nearest_neighbor(&locations(&["A"]), &DistanceTable::new(), &loc("B")).unwrap_err();
        assert_eq!(err, Error::UnknownHome(loc("B")));
    }
}
