//! Normalized solver input.

use std::collections::HashSet;

use crate::error::{Error, Result};

use super::Location;

/// The distinct locations of one solve, in supplied order, with the home
/// location's position among them.
///
/// Duplicate names are dropped, keeping the first occurrence, so the order
/// of the remaining locations is exactly the order they were supplied in.
/// Every solver derives its iteration order (and therefore its tie-breaks)
/// from this order.
///
/// # Examples
///
/// ```
/// use u_tour::models::{locations, Location, TspInstance};
///
/// let locs = locations(&["A", "B", "A", "C"]);
/// let instance = TspInstance::new(&locs, &Location::from("B")).unwrap();
/// assert_eq!(instance.len(), 3);
/// assert_eq!(instance.home_index(), 1);
/// let others: Vec<_> = instance.others().map(|l| l.as_str()).collect();
/// assert_eq!(others, ["A", "C"]);
/// ```
#[derive(Debug, Clone)]
pub struct TspInstance {
    locations: Vec<Location>,
    home: usize,
}

impl TspInstance {
    /// Deduplicates `locations` and locates `home` among them.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownHome`] if `home` is not one of `locations`.
    pub fn new(locations: &[Location], home: &Location) -> Result<Self> {
        let mut seen = HashSet::with_capacity(locations.len());
        let locations: Vec<Location> = locations
            .iter()
            .filter(|l| seen.insert(*l))
            .cloned()
            .collect();

        let home = locations
            .iter()
            .position(|l| l == home)
            .ok_or_else(|| Error::UnknownHome(home.clone()))?;

        Ok(Self { locations, home })
    }

    /// Distinct locations in supplied order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// The home location.
    pub fn home(&self) -> &Location {
        &self.locations[self.home]
    }

    /// Index of the home location in [`locations`](Self::locations).
    pub fn home_index(&self) -> usize {
        self.home
    }

    /// Non-home locations in supplied order.
    pub fn others(&self) -> impl Iterator<Item = &Location> + '_ {
        self.locations
            .iter()
            .enumerate()
            .filter(move |&(i, _)| i != self.home)
            .map(|(_, l)| l)
    }

    /// Number of distinct locations, home included.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Always `false`: an instance contains at least its home location.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}
