use thiserror::Error;

use crate::Face;

/// Error produced when reading a pattern string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum PatternError {
    #[error("pattern has {0} facelets (expected 54)")]
    WrongLength(usize),
    #[error("unknown facelet {ch:?} at index {index}")]
    UnknownFacelet { index: usize, ch: char },
    #[error("pattern has {count} facelets of color {face} (expected 9)")]
    WrongColorCount { face: Face, count: usize },
}

/// Error produced by a [`crate::Solver`].
///
/// These are distinct from invariant violations in the interaction engine.
/// When a solver fails, no moves are played and the cube state is untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum SolverError {
    #[error("unsolvable pattern: {0}")]
    Unsolvable(#[from] PatternError),
    #[error("no solution within {max_depth} moves")]
    NoSolution { max_depth: usize },
    #[error("solver returned malformed move {token:?}: {reason}")]
    MalformedOutput { token: String, reason: String },
}
