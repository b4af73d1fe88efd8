//! Side-by-side comparison of the available algorithms.
//!
//! Runs each configured algorithm on the same input (concurrently by
//! default), times it, and reports which one found the shortest tour.
//! Size guards keep the exponential solvers away from inputs they cannot
//! finish in interactive time.

mod compare;
mod config;

pub use compare::{compare, AlgorithmRun, Comparison, Outcome};
pub use config::ComparisonConfig;
