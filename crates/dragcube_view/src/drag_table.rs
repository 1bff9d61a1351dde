//! Mapping from a dragged face and screen direction to a rotation axis.

use cgmath::{Rad, Vector2};
use dragcube_core::Face;
use dragcube_notation::{Axis, Direction};
use itertools::iproduct;
use strum::{EnumIter, IntoEnumIterator};

/// Axis of the screen. X points right and Y points down.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter)]
pub enum ScreenAxis {
    /// Horizontal.
    X,
    /// Vertical.
    Y,
}
impl ScreenAxis {
    /// Returns the dominant axis of a screen-space vector. Ties resolve to
    /// [`ScreenAxis::Y`].
    pub fn dominant(v: Vector2<f32>) -> Self {
        if v.x.abs() > v.y.abs() {
            ScreenAxis::X
        } else {
            ScreenAxis::Y
        }
    }
    /// Returns the component of a vector along this axis.
    pub fn component(self, v: Vector2<f32>) -> f32 {
        match self {
            ScreenAxis::X => v.x,
            ScreenAxis::Y => v.y,
        }
    }
}

/// Rotation resolved from dragging a face along a screen axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct DragRule {
    /// Rotation axis.
    pub axis: Axis,
    /// Sign relating screen displacement to rotation about the positive end
    /// of `axis`.
    pub sign: Direction,
}

/// Returns the rotation for dragging `face` along `screen_axis`. For the top
/// and bottom faces, `screen_axis` must already be camera-corrected.
pub const fn drag_rule(face: Face, screen_axis: ScreenAxis) -> DragRule {
    use Direction::{Neg, Pos};

    let (axis, sign) = match (face, screen_axis) {
        (Face::U, ScreenAxis::Y) => (Axis::X, Pos),
        (Face::U, ScreenAxis::X) => (Axis::Z, Neg),
        (Face::D, ScreenAxis::Y) => (Axis::X, Pos),
        (Face::D, ScreenAxis::X) => (Axis::Z, Pos),
        (Face::L, ScreenAxis::Y) => (Axis::Z, Pos),
        (Face::L, ScreenAxis::X) => (Axis::Y, Pos),
        (Face::R, ScreenAxis::Y) => (Axis::Z, Neg),
        (Face::R, ScreenAxis::X) => (Axis::Y, Pos),
        (Face::F, ScreenAxis::Y) => (Axis::X, Pos),
        (Face::F, ScreenAxis::X) => (Axis::Y, Pos),
        (Face::B, ScreenAxis::Y) => (Axis::X, Neg),
        (Face::B, ScreenAxis::X) => (Axis::Y, Pos),
    };
    DragRule { axis, sign }
}

/// Returns whether the screen direction of a drag on `face` depends on where
/// the camera sits around the vertical axis.
pub const fn is_camera_dependent(face: Face) -> bool {
    matches!(face, Face::U | Face::D)
}

/// Returns the angle by which to rotate a screen-space drag on `face` before
/// looking it up in the drag table.
pub fn correction_angle(face: Face, azimuth: Rad<f32>) -> Rad<f32> {
    match face {
        Face::U => -azimuth,
        Face::D => azimuth,
        _ => Rad(0.0),
    }
}

/// Returns every entry of the drag table.
pub fn drag_table() -> impl Iterator<Item = (Face, ScreenAxis, DragRule)> {
    iproduct!(Face::iter(), ScreenAxis::iter())
        .map(|(face, screen_axis)| (face, screen_axis, drag_rule(face, screen_axis)))
}
