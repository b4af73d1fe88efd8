//! Scenario generator configuration.

use serde::{Deserialize, Serialize};

/// Parameters for random scenario generation.
///
/// # Examples
///
/// ```
/// use u_tour::scenario::ScenarioConfig;
///
/// let config = ScenarioConfig::default()
///     .with_num_locations(6)
///     .with_seed(42);
/// assert_eq!(config.num_locations, 6);
/// assert_eq!(config.min_distance, 50.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    /// Number of locations to generate (at least one is always generated).
    pub num_locations: usize,
    /// Side length of the square positions are drawn from.
    pub extent: f64,
    /// Lower bound of the scaled distance range.
    pub min_distance: f64,
    /// Upper bound of the scaled distance range.
    pub max_distance: f64,
    /// RNG seed; `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            num_locations: 10,
            extent: 100.0,
            min_distance: 50.0,
            max_distance: 100.0,
            seed: None,
        }
    }
}

impl ScenarioConfig {
    /// Sets the number of locations.
    pub fn with_num_locations(mut self, n: usize) -> Self {
        self.num_locations = n;
        self
    }

    /// Sets the side length of the position square.
    pub fn with_extent(mut self, extent: f64) -> Self {
        self.extent = extent;
        self
    }

    /// Sets the scaled distance range.
    pub fn with_distance_range(mut self, min: f64, max: f64) -> Self {
        self.min_distance = min;
        self.max_distance = max;
        self
    }

    /// Fixes the RNG seed for reproducible scenarios.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
