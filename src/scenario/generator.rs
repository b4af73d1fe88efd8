//! Random scenario generation.
//!
//! Places locations uniformly in a square, derives pairwise costs from
//! their Euclidean distance, folds those costs into a bounded range, and
//! picks a random home location.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::distance::DistanceTable;
use crate::models::Location;

use super::ScenarioConfig;

/// A point in the plane. Only used to derive distances and for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Position {
    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &Position) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// A generated problem: locations, their positions, a complete symmetric
/// distance table, and the home location.
#[derive(Debug, Clone)]
pub struct Scenario {
    locations: Vec<Location>,
    positions: Vec<Position>,
    distances: DistanceTable,
    home: Location,
}

impl Scenario {
    /// Generated locations in creation order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Complete distance table, both orderings of every pair stored.
    pub fn distances(&self) -> &DistanceTable {
        &self.distances
    }

    /// The randomly chosen home location.
    pub fn home(&self) -> &Location {
        &self.home
    }

    /// Position of `location`, if it belongs to this scenario.
    pub fn position(&self, location: &Location) -> Option<Position> {
        self.locations
            .iter()
            .position(|l| l == location)
            .map(|i| self.positions[i])
    }
}

/// Generates a random scenario.
///
/// With a seed, the same configuration always yields the same scenario.
///
/// # Examples
///
/// ```
/// use u_tour::exact::held_karp;
/// use u_tour::scenario::{generate, ScenarioConfig};
///
/// let scenario = generate(&ScenarioConfig::default().with_num_locations(5).with_seed(7));
/// assert_eq!(scenario.locations().len(), 5);
///
/// let tour = held_karp(scenario.locations(), scenario.distances(), scenario.home()).unwrap();
/// assert_eq!(tour.route().len(), 6);
/// ```
pub fn generate(config: &ScenarioConfig) -> Scenario {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let n = config.num_locations.max(1);
    let locations: Vec<Location> = (0..n).map(location_name).collect();
    let positions: Vec<Position> = (0..n)
        .map(|_| Position {
            x: coordinate(&mut rng, config.extent),
            y: coordinate(&mut rng, config.extent),
        })
        .collect();

    let mut distances = DistanceTable::new();
    for i in 0..n {
        for j in (i + 1)..n {
            let raw = positions[i].distance_to(&positions[j]);
            let cost = round2(scale_distance(raw, config.min_distance, config.max_distance));
            distances.insert_symmetric(locations[i].clone(), locations[j].clone(), cost);
        }
    }

    let home = locations[rng.random_range(0..n)].clone();
    debug!("generated scenario: {n} locations, home {home}");

    Scenario {
        locations,
        positions,
        distances,
        home,
    }
}

/// Folds a raw distance into `[min, max]`.
///
/// Values inside the range are returned unchanged. Values below `min` are
/// mapped to `min + d/100 · (max - min)`; values above `max` to
/// `min + ((d mod 50)/50) · (max - min)`.
///
/// ```
/// use u_tour::scenario::scale_distance;
///
/// assert_eq!(scale_distance(75.0, 50.0, 100.0), 75.0);
/// assert_eq!(scale_distance(20.0, 50.0, 100.0), 60.0);
/// assert_eq!(scale_distance(125.0, 50.0, 100.0), 75.0);
/// ```
pub fn scale_distance(d: f64, min: f64, max: f64) -> f64 {
    if d < min {
        min + (d / 100.0) * (max - min)
    } else if d > max {
        min + ((d % 50.0) / 50.0) * (max - min)
    } else {
        d
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

fn coordinate(rng: &mut StdRng, extent: f64) -> f64 {
    if extent > 0.0 {
        rng.random_range(0.0..extent)
    } else {
        0.0
    }
}

/// `City A` .. `City Z`, then `City 27`, `City 28`, ...
fn location_name(i: usize) -> Location {
    if i < 26 {
        Location::new(format!("City {}", (b'A' + i as u8) as char))
    } else {
        Location::new(format!("City {}", i + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(location_name(0).as_str(), "City A");
        assert_eq!(location_name(25).as_str(), "City Z");
        assert_eq!(location_name(26).as_str(), "City 27");
    }

    #[test]
    fn test_scale_distance_boundaries() {
        assert_eq!(scale_distance(50.0, 50.0, 100.0), 50.0);
        assert_eq!(scale_distance(100.0, 50.0, 100.0), 100.0);
        assert_eq!(scale_distance(0.0, 50.0, 100.0), 50.0);
        assert_eq!(scale_distance(140.0, 50.0, 100.0), 90.0);
    }

    #[test]
    fn test_complete_table_within_range() {
        let config = ScenarioConfig::default().with_num_locations(8).with_seed(1);
        let scenario = generate(&config);
        let locs = scenario.locations();
        assert_eq!(locs.len(), 8);
        assert_eq!(scenario.distances().len(), 8 * 7);
        for a in locs {
            for b in locs {
                let d = scenario.distances().distance(a, b).expect("complete table");
                if a == b {
                    assert_eq!(d, 0.0);
                } else {
                    assert!((50.0..=100.0).contains(&d), "{a}-{b}: {d}");
                    assert_eq!(d, round2(d));
                }
            }
        }
        assert!(locs.contains(scenario.home()));
    }

    #[test]
    fn test_seed_is_reproducible() {
        let config = ScenarioConfig::default().with_num_locations(6).with_seed(99);
        let a = generate(&config);
        let b = generate(&config);
        assert_eq!(a.home(), b.home());
        for l in a.locations() {
            assert_eq!(a.position(l), b.position(l));
        }
    }

    #[test]
    fn test_positions_inside_extent() {
        let scenario = generate(&ScenarioConfig::default().with_extent(10.0).with_seed(3));
        for l in scenario.locations() {
            let p = scenario.position(l).expect("known location");
            assert!((0.0..10.0).contains(&p.x));
            assert!((0.0..10.0).contains(&p.y));
        }
        assert!(scenario.position(&Location::from("Nowhere")).is_none());
    }

    #[test]
    fn test_zero_locations_still_has_home() {
        let scenario = generate(&ScenarioConfig::default().with_num_locations(0).with_seed(5));
        assert_eq!(scenario.locations().len(), 1);
        assert_eq!(scenario.home().as_str(), "City A");
        assert!(scenario.distances().is_empty());
    }
}
