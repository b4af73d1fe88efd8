//! Sparse, name-keyed distance table.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::models::Location;

/// Costs between named locations, keyed by origin then destination.
///
/// Lookups accept either ordering of a pair: `(a, b)` is tried first, then
/// `(b, a)`. A missing pair is an error rather than zero or infinity.
/// Self-distance is always zero and needs no entry.
///
/// Symmetry is not synthesized: [`insert`](Self::insert) stores one
/// ordering, [`insert_symmetric`](Self::insert_symmetric) stores both.
///
/// # Examples
///
/// ```
/// use u_tour::distance::DistanceTable;
/// use u_tour::models::Location;
///
/// let a = Location::from("A");
/// let b = Location::from("B");
///
/// let mut table = DistanceTable::new();
/// table.insert(a.clone(), b.clone(), 10.0);
///
/// assert_eq!(table.distance(&a, &b).unwrap(), 10.0);
/// assert_eq!(table.distance(&b, &a).unwrap(), 10.0);
/// assert_eq!(table.distance(&a, &a).unwrap(), 0.0);
/// assert!(table.distance(&a, &Location::from("C")).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DistanceTable {
    entries: HashMap<Location, HashMap<Location, f64>>,
}

impl DistanceTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from `(from, to, cost)` triples given by name.
    ///
    /// ```
    /// use u_tour::distance::DistanceTable;
    ///
    /// let table = DistanceTable::from_pairs([("A", "B", 10.0), ("B", "C", 5.0)]);
    /// assert_eq!(table.len(), 2);
    /// ```
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S, f64)>,
        S: Into<Location>,
    {
        let mut table = Self::new();
        for (from, to, cost) in pairs {
            table.insert(from.into(), to.into(), cost);
        }
        table
    }

    /// Stores the cost for the ordered pair `(from, to)` only.
    pub fn insert(&mut self, from: Location, to: Location, cost: f64) {
        self.entries.entry(from).or_default().insert(to, cost);
    }

    /// Stores the cost for both orderings of the pair.
    pub fn insert_symmetric(&mut self, a: Location, b: Location, cost: f64) {
        self.insert(b.clone(), a.clone(), cost);
        self.insert(a, b, cost);
    }

    /// Returns the cost between `from` and `to`.
    ///
    /// Tries `(from, to)`, then `(to, from)`. Returns `0.0` when
    /// `from == to`.
    ///
    /// # Errors
    ///
    /// [`Error::UndefinedDistance`] if neither ordering is present.
    pub fn distance(&self, from: &Location, to: &Location) -> Result<f64> {
        if from == to {
            return Ok(0.0);
        }
        self.lookup(from, to)
            .ok_or_else(|| Error::undefined_distance(from, to))
    }

    /// Returns `true` if [`distance`](Self::distance) would succeed.
    pub fn contains(&self, from: &Location, to: &Location) -> bool {
        from == to || self.lookup(from, to).is_some()
    }

    /// Sum of consecutive-pair distances along `route`.
    ///
    /// An empty or single-element route has length zero.
    pub fn route_length(&self, route: &[Location]) -> Result<f64> {
        route
            .windows(2)
            .map(|w| self.distance(&w[0], &w[1]))
            .sum()
    }

    /// Number of stored ordered pairs.
    pub fn len(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    /// Returns `true` if no pairs are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.values().all(HashMap::is_empty)
    }

    fn lookup(&self, from: &Location, to: &Location) -> Option<f64> {
        self.get(from, to).or_else(|| self.get(to, from))
    }

    fn get(&self, from: &Location, to: &Location) -> Option<f64> {
        self.entries.get(from)?.get(to).copied()
    }
}

impl FromIterator<((Location, Location), f64)> for DistanceTable {
    fn from_iter<T: IntoIterator<Item = ((Location, Location), f64)>>(iter: T) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl Extend<((Location, Location), f64)> for DistanceTable {
    fn extend<T: IntoIterator<Item = ((Location, Location), f64)>>(&mut self, iter: T) {
        for ((from, to), cost) in iter {
            self.insert(from, to, cost);
        }
    }
}
