//! Random problem generation.
//!
//! Produces complete, symmetric distance tables over named locations for
//! demos, benchmarks and tests. The solvers never depend on this module.

mod config;
mod generator;

pub use config::ScenarioConfig;
pub use generator::{generate, scale_distance, Position, Scenario};
