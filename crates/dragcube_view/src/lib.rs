//! Interaction engine for a 3x3x3 twisty puzzle cube.
//!
//! A [`GestureClassifier`] turns pointer samples into layer twists, and a
//! [`MoveSequencer`] applies twists and move lists to the cube state one
//! operation at a time. [`CubeController`] ties them together behind the
//! pointer and command boundaries.

mod animator;
mod camera;
mod controller;
mod drag_table;
mod errors;
mod gesture;
mod guard;
mod progress;
mod sequencer;
mod snap;

pub use animator::LayerAnimator;
pub use camera::{CameraFrame, OrbitCamera};
pub use controller::CubeController;
pub use drag_table::{
    DragRule, ScreenAxis, correction_angle, drag_rule, drag_table, is_camera_dependent,
};
pub use errors::{GestureError, SequencerError};
pub use gesture::{
    AxisLock, DragState, GestureClassifier, GestureConfig, GestureSession, LayerGrip,
    PendingAnimation, Release, ResolvedTwist, SurfaceHit,
};
pub use guard::{FlightToken, Outcome, SingleFlight};
pub use progress::MoveProgress;
pub use sequencer::MoveSequencer;
pub use snap::SnapAngle;

#[cfg(test)]
mod test_util;
