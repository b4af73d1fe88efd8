//! Location identifier.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An opaque, named location.
///
/// Solvers only compare locations for equality and use them as lookup keys;
/// coordinates are not part of a location.
///
/// # Examples
///
/// ```
/// use u_tour::models::Location;
///
/// let a = Location::from("City A");
/// assert_eq!(a.as_str(), "City A");
/// assert_eq!(a.to_string(), "City A");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Location(String);

impl Location {
    /// Creates a location with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the location name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Location {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl From<String> for Location {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl AsRef<str> for Location {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Builds a list of locations from names.
///
/// ```
/// use u_tour::models::locations;
///
/// let locs = locations(&["A", "B"]);
/// assert_eq!(locs.len(), 2);
/// assert_eq!(locs[1].as_str(), "B");
/// ```
pub fn locations<S: AsRef<str>>(names: &[S]) -> Vec<Location> {
    names.iter().map(|n| Location::from(n.as_ref())).collect()
}
