//! Distance lookup between locations.
//!
//! [`DistanceTable`] is the sparse, name-keyed cost collection every solver
//! reads from. [`DistanceMatrix`] is a dense index-keyed snapshot of it for
//! solvers that work on integer indices.

mod matrix;
mod table;

pub use matrix::DistanceMatrix;
pub use table::DistanceTable;
