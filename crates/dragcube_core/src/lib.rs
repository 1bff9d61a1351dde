//! Symbolic model of a 3x3x3 twisty puzzle cube.
//!
//! [`CubeState`] stores the color of each of the 54 facelets and can be
//! serialized to and from a pattern string.

mod errors;
mod geometry;
pub mod patterns;
mod shuffle;
mod solver;
mod state;

pub use errors::{PatternError, SolverError};
pub use geometry::{Cubelet, Face, Facelet, rotate_vector};
pub use shuffle::{random_shuffle, seeded_shuffle, shuffle_moves};
pub use solver::{BoundedSolver, Solver, solution_moves};
pub use state::{CubeState, SOLVED_PATTERN};

/// Re-export of `dragcube_notation`.
pub use dragcube_notation as notation;
