//! Error types shared by every solver.

use thiserror::Error as ThisError;

use crate::models::Location;

/// Reason a route was rejected by the validator.
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum RouteViolation {
    /// The route contains no locations at all.
    #[error("route cannot be empty")]
    EmptyRoute,
    /// The route does not begin and end at the home location.
    #[error("route must start and end at the home location {home} (got {first} .. {last})")]
    WrongEndpoints {
        /// Expected home location.
        home: Location,
        /// First element of the route.
        first: Location,
        /// Last element of the route.
        last: Location,
    },
    /// The home location appears other than exactly twice.
    #[error("home location {home} must appear exactly twice, found {count}")]
    BadHomeMultiplicity {
        /// Home location.
        home: Location,
        /// Number of occurrences in the route.
        count: usize,
    },
    /// A non-home location is visited more than once.
    #[error("location {location} must be visited exactly once, found {count}")]
    DuplicateOrMissingLocation {
        /// Offending location.
        location: Location,
        /// Number of occurrences in the route.
        count: usize,
    },
    /// The route visits a location outside the required set.
    #[error("location {location} is not part of the required location set")]
    UnexpectedLocation {
        /// Offending location.
        location: Location,
    },
    /// A required location is absent from the route.
    #[error("required location {location} is missing from the route")]
    MissingLocation {
        /// Location that was never visited.
        location: Location,
    },
}

/// Errors produced while solving or validating a tour.
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum Error {
    /// Neither ordering of a required pair is present in the distance table.
    #[error("no distance found between {from} and {to}")]
    UndefinedDistance {
        /// Origin of the lookup.
        from: Location,
        /// Destination of the lookup.
        to: Location,
    },
    /// A route failed validation.
    #[error("invalid route: {0}")]
    InvalidRoute(#[from] RouteViolation),
    /// The home location is not a member of the supplied location set.
    #[error("home location {0} is not in the location set")]
    UnknownHome(Location),
    /// The input is larger than the solver's state space can hold.
    #[error("{count} locations exceed the solver limit of {max}")]
    TooManyLocations {
        /// Distinct locations supplied.
        count: usize,
        /// Largest accepted count.
        max: usize,
    },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates an [`Error::UndefinedDistance`] for the given ordered pair.
    pub fn undefined_distance(from: &Location, to: &Location) -> Self {
        Self::UndefinedDistance {
            from: from.clone(),
            to: to.clone(),
        }
    }

    /// Returns `true` if this is an [`Error::UndefinedDistance`] for the
    /// unordered pair `{a, b}`.
    pub fn is_undefined_between(&self, a: &Location, b: &Location) -> bool {
        match self {
            Self::UndefinedDistance { from, to } => {
                (from == a && to == b) || (from == b && to == a)
            }
            _ => false,
        }
    }

    /// Returns the route violation if this is an [`Error::InvalidRoute`].
    pub fn violation(&self) -> Option<&RouteViolation> {
        match self {
            Self::InvalidRoute(v) => Some(v),
            _ => None,
        }
    }
}
