//! Dense distance matrix.

use crate::error::Result;
use crate::models::Location;

use super::DistanceTable;

/// A dense n×n distance matrix stored in row-major order.
///
/// Rows and columns follow the order of the location list the matrix was
/// built from, so index-based solvers can avoid name lookups in their
/// inner loops.
///
/// # Examples
///
/// ```
/// use u_tour::distance::{DistanceMatrix, DistanceTable};
/// use u_tour::models::locations;
///
/// let locs = locations(&["A", "B", "C"]);
/// let table = DistanceTable::from_pairs([("A", "B", 3.0), ("A", "C", 4.0), ("B", "C", 5.0)]);
/// let dm = DistanceMatrix::from_table(&locs, &table).unwrap();
/// assert_eq!(dm.get(2, 0), 4.0);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Resolves every ordered pair of `locations` through `table`.
    ///
    /// Pairs are resolved row by row, so the error names the first
    /// missing pair in that order.
    ///
    /// # Errors
    ///
    /// [`Error::UndefinedDistance`](crate::Error::UndefinedDistance) if any
    /// pair of distinct locations is absent from the table.
    pub fn from_table(locations: &[Location], table: &DistanceTable) -> Result<Self> {
        let n = locations.len();
        let mut dm = Self::new(n);
        for (i, from) in locations.iter().enumerate() {
            for (j, to) in locations.iter().enumerate() {
                if i != j {
                    dm.set(i, j, table.distance(from, to)?);
                }
            }
        }
        Ok(dm)
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Sum of consecutive-pair distances along an index sequence.
    pub fn tour_length(&self, indices: &[usize]) -> f64 {
        indices.windows(2).map(|w| self.get(w[0], w[1])).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::models::locations;

    #[test]
    fn test_from_table_resolves_reverse_entries() {
        let locs = locations(&["A", "B"]);
        let table = DistanceTable::from_pairs([("A", "B", 10.0)]);
        let dm = DistanceMatrix::from_table(&locs, &table).expect("complete");
        assert_eq!(dm.get(0, 1), 10.0);
        assert_eq!(dm.get(1, 0), 10.0);
        assert_eq!(dm.get(0, 0), 0.0);
    }

    #[test]
    fn test_from_table_missing_pair() {
        let locs = locations(&["A", "B", "C"]);
        let table = DistanceTable::from_pairs([("A", "B", 10.0), ("B", "C", 15.0)]);
        let err = DistanceMatrix::from_table(&locs, &table).unwrap_err();
        assert_eq!(
            err,
            Error::undefined_distance(&locs[0], &locs[2])
        );
    }

    #[test]
    fn test_set_get() {
        let mut dm = DistanceMatrix::new(3);
        dm.set(0, 1, 42.0);
        assert_eq!(dm.get(0, 1), 42.0);
        assert_eq!(dm.get(1, 0), 0.0);
    }

    #[test]
    fn test_tour_length() {
        let mut dm = DistanceMatrix::new(3);
        dm.set(0, 1, 1.0);
        dm.set(1, 2, 2.0);
        dm.set(2, 0, 3.0);
        assert_eq!(dm.tour_length(&[0, 1, 2, 0]), 6.0);
        assert_eq!(dm.tour_length(&[0]), 0.0);
    }
}
