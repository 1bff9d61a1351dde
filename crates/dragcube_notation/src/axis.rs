use std::fmt;

use strum::{EnumIter, IntoEnumIterator};

use crate::Sign;

/// Rotation axis in the cube's world frame.
///
/// Y is vertical; the up face is at positive Y.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter)]
pub enum Axis {
    /// X axis (right).
    X = 0,
    /// Y axis (up).
    Y = 1,
    /// Z axis (front).
    Z = 2,
}
impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
        }
    }
}
impl Axis {
    /// Returns the index of the axis, for use in arrays of coordinates.
    pub const fn int(self) -> usize {
        self as usize
    }
    /// Returns the axis with the given index.
    pub const fn from_int(i: usize) -> Option<Self> {
        match i {
            0 => Some(Axis::X),
            1 => Some(Axis::Y),
            2 => Some(Axis::Z),
            _ => None,
        }
    }
    /// Returns an iterator over all axes.
    pub fn iter() -> impl Clone + Iterator<Item = Axis> {
        <Self as IntoEnumIterator>::iter()
    }
    /// Returns the unit vector along the axis, scaled by `sign`.
    pub fn unit(self, sign: Sign) -> [i8; 3] {
        let mut ret = [0; 3];
        ret[self.int()] = sign.int();
        ret
    }
}
