//! Exhaustive permutation search.
//!
//! # Algorithm
//!
//! Enumerates every ordering of the non-home locations in lexicographic
//! order (relative to the supplied location order), closes each one into a
//! tour through home, and keeps the shortest. Ties keep the first tour
//! found.
//!
//! # Complexity
//!
//! O((n-1)! · n). Only practical for roughly a dozen locations.

use log::debug;

use crate::distance::DistanceTable;
use crate::error::Result;
use crate::models::{Location, Tour, TspInstance};
use crate::validation::validate_route_against;

/// Finds an optimal tour by trying every permutation.
///
/// Distances are looked up lazily per candidate tour, so a missing pair is
/// reported when the first tour that needs it is scored.
///
/// # Errors
///
/// - [`Error::UndefinedDistance`](crate::Error::UndefinedDistance) if a
///   candidate tour uses a pair absent from `distances`.
/// - [`Error::UnknownHome`](crate::Error::UnknownHome) if `home` is not in
///   `locations`.
///
/// # Examples
///
/// ```
/// use u_tour::distance::DistanceTable;
/// use u_tour::exact::brute_force;
/// use u_tour::models::{locations, Location};
///
/// let locs = locations(&["A", "B", "C", "D"]);
/// let table = DistanceTable::from_pairs([
///     ("A", "B", 1.0), ("A", "C", 5.0), ("A", "D", 1.0),
///     ("B", "C", 1.0), ("B", "D", 5.0), ("C", "D", 1.0),
/// ]);
///
/// let tour = brute_force(&locs, &table, &Location::from("A")).unwrap();
/// assert_eq!(tour.length(), 4.0);
/// let names: Vec<_> = tour.route().iter().map(|l| l.as_str()).collect();
/// assert_eq!(names, ["A", "B", "C", "D", "A"]);
/// ```
pub fn brute_force(
    locations: &[Location],
    distances: &DistanceTable,
    home: &Location,
) -> Result<Tour> {
    let instance = TspInstance::new(locations, home)?;
    let home = instance.home();
    let others: Vec<&Location> = instance.others().collect();
    debug!("brute force: {} locations", instance.len());

    let mut perm: Vec<usize> = (0..others.len()).collect();
    let mut best: Option<(Vec<usize>, f64)> = None;

    loop {
        let length = closed_length(home, &others, &perm, distances)?;
        if best.as_ref().map_or(true, |(_, b)| length < *b) {
            best = Some((perm.clone(), length));
        }
        if !next_permutation(&mut perm) {
            break;
        }
    }

    // The identity permutation is always scored, so `best` is set here.
    let (order, length) = best.unwrap_or_default();
    let mut route = Vec::with_capacity(others.len() + 2);
    route.push(home.clone());
    route.extend(order.iter().map(|&i| others[i].clone()));
    route.push(home.clone());

    validate_route_against(&route, home, instance.locations())?;
    debug!("brute force: best length {length}");
    Ok(Tour::new(route, length))
}

/// Length of `home → others[perm[0]] → … → home`, summed front to back.
fn closed_length(
    home: &Location,
    others: &[&Location],
    perm: &[usize],
    distances: &DistanceTable,
) -> Result<f64> {
    let mut total = 0.0;
    let mut prev = home;
    for &i in perm {
        total += distances.distance(prev, others[i])?;
        prev = others[i];
    }
    total += distances.distance(prev, home)?;
    Ok(total)
}

/// Advances `perm` to the next permutation in lexicographic order.
///
/// Returns `false` (leaving `perm` untouched) when it is already the last
/// one.
pub(crate) fn next_permutation(perm: &mut [usize]) -> bool {
    if perm.len() < 2 {
        return false;
    }

    let mut i = perm.len() - 1;
    while i > 0 && perm[i - 1] >= perm[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }

    let mut j = perm.len() - 1;
    while perm[j] <= perm[i - 1] {
        j -= 1;
    }
    perm.swap(i - 1, j);
    perm[i..].reverse();
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::models::locations;

    fn loc(name: &str) -> Location {
        Location::from(name)
    }

    #[test]
    fn test_next_permutation_order() {
        let mut perm = vec![0, 1, 2];
        let mut seen = vec![perm.clone()];
        while next_permutation(&mut perm) {
            seen.push(perm.clone());
        }
        assert_eq!(
            seen,
            vec![
                vec![0, 1, 2],
                vec![0, 2, 1],
                vec![1, 0, 2],
                vec![1, 2, 0],
                vec![2, 0, 1],
                vec![2, 1, 0],
            ]
        );
    }

    #[test]
    fn test_next_permutation_trivial() {
        let mut empty: Vec<usize> = vec![];
        assert!(!next_permutation(&mut empty));
        let mut single = vec![0];
        assert!(!next_permutation(&mut single));
    }

    #[test]
    fn test_two_locations() {
        let table = DistanceTable::from_pairs([("A", "B", 10.0)]);
        let tour = brute_force(&locations(&["A", "B"]), &table, &loc("A")).expect("solvable");
        assert_eq!(tour.route(), locations(&["A", "B", "A"]).as_slice());
        assert_eq!(tour.length(), 20.0);
    }

    #[test]
    fn test_home_only() {
        let tour = brute_force(&locations(&["A"]), &DistanceTable::new(), &loc("A"))
            .expect("solvable");
        assert_eq!(tour.route(), locations(&["A", "A"]).as_slice());
        assert_eq!(tour.length(), 0.0);
    }

    #[test]
    fn test_first_tour_wins_ties() {
        // Every tour over a uniform table has the same length; the
        // identity order comes first.
        let table = DistanceTable::from_pairs([
            ("A", "B", 1.0),
            ("A", "C", 1.0),
            ("A", "D", 1.0),
            ("B", "C", 1.0),
            ("B", "D", 1.0),
            ("C", "D", 1.0),
        ]);
        let tour = brute_force(&locations(&["A", "B", "C", "D"]), &table, &loc("A"))
            .expect("solvable");
        assert_eq!(tour.route(), locations(&["A", "B", "C", "D", "A"]).as_slice());
        assert_eq!(tour.length(), 4.0);
    }

    #[test]
    fn test_home_not_first() {
        let table = DistanceTable::from_pairs([("A", "B", 3.0), ("A", "C", 4.0), ("B", "C", 5.0)]);
        let tour = brute_force(&locations(&["A", "B", "C"]), &table, &loc("C"))
            .expect("solvable");
        assert_eq!(tour.route(), locations(&["C", "A", "B", "C"]).as_slice());
        assert_eq!(tour.length(), 12.0);
    }

    #[test]
    fn test_missing_distance() {
        let table = DistanceTable::from_pairs([("A", "B", 10.0), ("B", "C", 15.0)]);
        let err = brute_force(&locations(&["A", "B", "C"]), &table, &loc("A")).unwrap_err();
        assert!(err.is_undefined_between(&loc("A"), &loc("C")));
    }

    #[test]
    fn test_unknown_home() {
        let table = DistanceTable::from_pairs([("A", "B", 10.0)]);
        let err = brute_force(&locations(&["A", "B"]), &table, &loc("Z")).unwrap_err();
        assert_eq!(err, Error::UnknownHome(loc("Z")));
    }
}
