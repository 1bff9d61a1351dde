//! Static mapping between layers and notation letters.

use std::fmt;

use strum::{EnumIter, IntoEnumIterator};

use crate::{Axis, Direction, Sign};

/// Letter naming a single layer of the cube.
///
/// Outer faces use their conventional letters and the three middle slices use
/// `M`, `E`, and `S`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter)]
#[allow(missing_docs)]
pub enum MoveFamily {
    U,
    D,
    L,
    R,
    F,
    B,
    M,
    E,
    S,
}
impl fmt::Display for MoveFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
impl MoveFamily {
    /// Returns the letter used in notation.
    pub const fn letter(self) -> char {
        match self {
            MoveFamily::U => 'U',
            MoveFamily::D => 'D',
            MoveFamily::L => 'L',
            MoveFamily::R => 'R',
            MoveFamily::F => 'F',
            MoveFamily::B => 'B',
            MoveFamily::M => 'M',
            MoveFamily::E => 'E',
            MoveFamily::S => 'S',
        }
    }
    /// Returns the family with the given letter.
    pub fn from_letter(c: char) -> Option<Self> {
        MoveFamily::iter().find(|family| family.letter() == c)
    }
    /// Returns whether this family turns an outer face rather than a middle
    /// slice.
    pub const fn is_outer(self) -> bool {
        !matches!(self, MoveFamily::M | MoveFamily::E | MoveFamily::S)
    }
    /// Returns the axis and layer turned by this family.
    pub fn layer(self) -> (Axis, Sign) {
        NotationTable::reverse_lookup(self)
    }
    /// Returns the turn sense of the uninverted token, about the positive end
    /// of the family's axis.
    pub fn base_direction(self) -> Direction {
        let (axis, layer) = self.layer();
        NotationTable::lookup(axis, layer).1
    }
}

/// Entry of the notation table.
type Entry = (MoveFamily, Direction);

/// Notation table, indexed by axis and then by layer (from negative to
/// positive).
const TABLE: [[Entry; 3]; 3] = {
    use Direction::{Neg, Pos};
    use MoveFamily::*;
    [
        [(L, Pos), (M, Pos), (R, Neg)],
        [(D, Pos), (E, Pos), (U, Neg)],
        [(B, Pos), (S, Neg), (F, Neg)],
    ]
};

/// Static mapping from `(axis, layer)` to a move family and the direction in
/// which its uninverted token turns.
///
/// Directions are measured about the positive end of the axis. For example,
/// `R` turns clockwise when viewed from the right, which is
/// [`Direction::Neg`] about +X.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct NotationTable;
impl NotationTable {
    /// Returns the move family and base direction for a layer. This is total
    /// over all axes and layers.
    pub const fn lookup(axis: Axis, layer: Sign) -> (MoveFamily, Direction) {
        TABLE[axis.int()][layer.idx()]
    }

    /// Returns the axis and layer turned by a move family.
    pub fn reverse_lookup(family: MoveFamily) -> (Axis, Sign) {
        for axis in Axis::iter() {
            for layer in Sign::iter() {
                if TABLE[axis.int()][layer.idx()].0 == family {
                    return (axis, layer);
                }
            }
        }
        // Every family appears exactly once in `TABLE`.
        unreachable!("move family {family} missing from notation table")
    }

    /// Returns an iterator over every entry of the table.
    pub fn entries() -> impl Iterator<Item = (Axis, Sign, MoveFamily, Direction)> {
        Axis::iter().flat_map(|axis| {
            Sign::iter().map(move |layer| {
                let (family, dir) = Self::lookup(axis, layer);
                (axis, layer, family, dir)
            })
        })
    }
}
