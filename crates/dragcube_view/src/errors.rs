use dragcube_core::{PatternError, SolverError};
use dragcube_notation::NotationError;
use thiserror::Error;

/// Broken invariant in the interaction engine. These abort the current
/// operation; the gesture is discarded and the visual layer is reset.
#[derive(Error, Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum GestureError {
    #[error("face normal {normal:?} is not near any axis")]
    UnsnappedNormal { normal: [f32; 3] },
    #[error("drag displacement {delta:?} does not determine a rotation axis")]
    UnresolvedAxis { delta: [f32; 2] },
    #[error("release angle {degrees} degrees is outside of every snapping bin")]
    BadSnapAngle { degrees: f32 },
}

/// Error produced by a guarded cube operation.
#[derive(Error, Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum SequencerError {
    #[error(transparent)]
    Gesture(#[from] GestureError),
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error(transparent)]
    Solver(#[from] SolverError),
    #[error(transparent)]
    Notation(#[from] NotationError),
}
