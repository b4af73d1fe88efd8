//! Solved tour type.

use serde::{Deserialize, Serialize};

use super::Location;

/// A closed tour produced by a solver, together with its total length.
///
/// The route starts and ends at the home location and visits every other
/// location exactly once. `length` is the sum of consecutive-pair
/// distances along the route.
///
/// # Examples
///
/// ```
/// use u_tour::models::{locations, Tour};
///
/// let tour = Tour::new(locations(&["A", "B", "A"]), 20.0);
/// assert_eq!(tour.home().map(|h| h.as_str()), Some("A"));
/// assert_eq!(tour.num_locations(), 2);
/// assert_eq!(tour.length(), 20.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    route: Vec<Location>,
    length: f64,
}

impl Tour {
    /// Creates a tour from a closed route and its length.
    pub fn new(route: Vec<Location>, length: f64) -> Self {
        Self { route, length }
    }

    /// Returns the ordered route, home location at both ends.
    pub fn route(&self) -> &[Location] {
        &self.route
    }

    /// Total tour length.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Returns the home location (first element of the route).
    pub fn home(&self) -> Option<&Location> {
        self.route.first()
    }

    /// Returns the route without the closing return to home.
    pub fn visits(&self) -> &[Location] {
        match self.route.len() {
            0 => &self.route,
            n => &self.route[..n - 1],
        }
    }

    /// Number of distinct locations on the tour.
    pub fn num_locations(&self) -> usize {
        self.route.len().saturating_sub(1)
    }

    /// Consumes the tour, returning `(route, length)`.
    pub fn into_parts(self) -> (Vec<Location>, f64) {
        (self.route, self.length)
    }
}
