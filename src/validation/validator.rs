//! Route validator that checks endpoints and visit multiplicities.

use std::collections::{HashMap, HashSet};

use crate::error::{Result, RouteViolation};
use crate::models::Location;

/// Validates routes against a home location and, optionally, the full set
/// of locations the route is required to cover.
///
/// Checks run in order and the first failure is reported:
///
/// 1. the route is non-empty,
/// 2. it begins and ends at home,
/// 3. home appears exactly twice,
/// 4. every other location appears exactly once,
/// 5. (only with [`with_required`](Self::with_required)) the route visits
///    exactly the required locations.
///
/// Without a required set, step 4 only checks multiplicities: a route that
/// substitutes an unknown location for a required one still passes.
///
/// # Examples
///
/// ```
/// use u_tour::models::{locations, Location};
/// use u_tour::validation::RouteValidator;
///
/// let home = Location::from("A");
/// let required = locations(&["A", "B", "C"]);
/// let validator = RouteValidator::new(&home).with_required(&required);
///
/// assert!(validator.validate(&locations(&["A", "C", "B", "A"])).is_ok());
/// assert!(validator.validate(&locations(&["A", "B", "A"])).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RouteValidator<'a> {
    home: &'a Location,
    required: Option<&'a [Location]>,
}

impl<'a> RouteValidator<'a> {
    /// Creates a validator that checks endpoints and multiplicities only.
    pub fn new(home: &'a Location) -> Self {
        Self {
            home,
            required: None,
        }
    }

    /// Additionally requires the route to visit exactly `locations`.
    ///
    /// Duplicates in `locations` are ignored.
    pub fn with_required(mut self, locations: &'a [Location]) -> Self {
        self.required = Some(locations);
        self
    }

    /// Validates `route`, returning the first violation found.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidRoute`](crate::Error::InvalidRoute) describing the
    /// failed check.
    pub fn validate(&self, route: &[Location]) -> Result<()> {
        self.check_multiplicity(route)?;
        if let Some(required) = self.required {
            check_coverage(route, required)?;
        }
        Ok(())
    }

    fn check_multiplicity(&self, route: &[Location]) -> Result<()> {
        let (first, last) = match (route.first(), route.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(RouteViolation::EmptyRoute.into()),
        };

        if first != self.home || last != self.home {
            return Err(RouteViolation::WrongEndpoints {
                home: self.home.clone(),
                first: first.clone(),
                last: last.clone(),
            }
            .into());
        }

        let mut counts: HashMap<&Location, usize> = HashMap::with_capacity(route.len());
        for location in route {
            *counts.entry(location).or_insert(0) += 1;
        }

        let home_count = counts.get(self.home).copied().unwrap_or(0);
        if home_count != 2 {
            return Err(RouteViolation::BadHomeMultiplicity {
                home: self.home.clone(),
                count: home_count,
            }
            .into());
        }

        // Walk the route so the reported location is deterministic.
        for location in route {
            let count = counts[location];
            if location != self.home && count != 1 {
                return Err(RouteViolation::DuplicateOrMissingLocation {
                    location: location.clone(),
                    count,
                }
                .into());
            }
        }

        Ok(())
    }
}

fn check_coverage(route: &[Location], required: &[Location]) -> Result<()> {
    let required_set: HashSet<&Location> = required.iter().collect();
    if let Some(location) = route.iter().find(|l| !required_set.contains(l)) {
        return Err(RouteViolation::UnexpectedLocation {
            location: location.clone(),
        }
        .into());
    }

    let visited: HashSet<&Location> = route.iter().collect();
    if let Some(location) = required.iter().find(|l| !visited.contains(l)) {
        return Err(RouteViolation::MissingLocation {
            location: location.clone(),
        }
        .into());
    }

    Ok(())
}

/// Checks endpoints and multiplicities of `route` against `home`.
///
/// Does not confirm that every required location was included; see
/// [`validate_route_against`] for that.
pub fn validate_route(route: &[Location], home: &Location) -> Result<()> {
    RouteValidator::new(home).validate(route)
}

/// Like [`validate_route`], and additionally requires the route to visit
/// exactly the locations in `locations`.
pub fn validate_route_against(
    route: &[Location],
    home: &Location,
    locations: &[Location],
) -> Result<()> {
    RouteValidator::new(home)
        .with_required(locations)
        .validate(route)
}
