//! Domain model types for tour construction.
//!
//! Provides named locations, the normalized solver input, solved tours
//! (route plus length), and the identifiers of the available algorithms.

mod algorithm;
mod location;
mod problem;
mod tour;

pub use algorithm::Algorithm;
pub use location::{locations, Location};
pub use problem::TspInstance;
pub use tour::Tour;
