//! Cubelet and facelet locations on a 3x3x3 cube.

use std::fmt;
use std::ops::{Index, IndexMut};

use dragcube_notation::{Axis, Sign};
use lazy_static::lazy_static;
use strum::{EnumIter, IntoEnumIterator};

/// Face of the cube, which doubles as a facelet color.
///
/// Variants are listed in the order that faces appear in a pattern string.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter)]
#[allow(missing_docs)]
pub enum Face {
    U,
    R,
    F,
    D,
    L,
    B,
}
impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}
impl Face {
    /// Returns the character used for this face in a pattern string.
    pub const fn char(self) -> char {
        match self {
            Face::U => 'U',
            Face::R => 'R',
            Face::F => 'F',
            Face::D => 'D',
            Face::L => 'L',
            Face::B => 'B',
        }
    }
    /// Returns the face with the given pattern character.
    pub fn from_char(c: char) -> Option<Self> {
        Face::iter().find(|face| face.char() == c)
    }
    /// Returns the index of the face in a pattern string, in the range 0..6.
    pub const fn idx(self) -> usize {
        self as usize
    }
    /// Returns the axis perpendicular to this face.
    pub const fn axis(self) -> Axis {
        match self {
            Face::R | Face::L => Axis::X,
            Face::U | Face::D => Axis::Y,
            Face::F | Face::B => Axis::Z,
        }
    }
    /// Returns which end of the axis this face is on.
    pub const fn sign(self) -> Sign {
        match self {
            Face::U | Face::R | Face::F => Sign::Pos,
            Face::D | Face::L | Face::B => Sign::Neg,
        }
    }
    /// Returns the face with the given outward normal, or `None` if `sign` is
    /// zero.
    pub const fn from_normal(axis: Axis, sign: Sign) -> Option<Self> {
        match (axis, sign) {
            (Axis::X, Sign::Pos) => Some(Face::R),
            (Axis::X, Sign::Neg) => Some(Face::L),
            (Axis::Y, Sign::Pos) => Some(Face::U),
            (Axis::Y, Sign::Neg) => Some(Face::D),
            (Axis::Z, Sign::Pos) => Some(Face::F),
            (Axis::Z, Sign::Neg) => Some(Face::B),
            (_, Sign::Zero) => None,
        }
    }
    /// Returns the outward normal of the face as an integer vector.
    pub fn normal(self) -> [i8; 3] {
        self.axis().unit(self.sign())
    }

    /// Returns the axis along which rows of facelets on this face advance, and
    /// the coordinate of the first row.
    const fn row_layout(self) -> (Axis, Sign) {
        match self {
            Face::U => (Axis::Z, Sign::Neg),
            Face::D => (Axis::Z, Sign::Pos),
            Face::R | Face::F | Face::L | Face::B => (Axis::Y, Sign::Pos),
        }
    }
    /// Returns the axis along which columns of facelets on this face advance,
    /// and the coordinate of the first column.
    const fn col_layout(self) -> (Axis, Sign) {
        match self {
            Face::U | Face::F | Face::D => (Axis::X, Sign::Neg),
            Face::R => (Axis::Z, Sign::Pos),
            Face::L => (Axis::Z, Sign::Neg),
            Face::B => (Axis::X, Sign::Pos),
        }
    }
}

/// Rotates an integer vector by a number of positive quarter turns about an
/// axis, using the right-hand rule.
pub fn rotate_vector(mut v: [i8; 3], axis: Axis, quarter_turns: u8) -> [i8; 3] {
    for _ in 0..quarter_turns % 4 {
        let [x, y, z] = v;
        v = match axis {
            Axis::X => [x, -z, y],
            Axis::Y => [z, y, -x],
            Axis::Z => [-y, x, z],
        };
    }
    v
}

/// Location of a cubelet. The core is not a cubelet, so every cubelet has at
/// least one nonzero coordinate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cubelet(pub [Sign; 3]);
impl Index<Axis> for Cubelet {
    type Output = Sign;
    fn index(&self, axis: Axis) -> &Sign {
        &self.0[axis.int()]
    }
}
impl IndexMut<Axis> for Cubelet {
    fn index_mut(&mut self, axis: Axis) -> &mut Sign {
        &mut self.0[axis.int()]
    }
}
impl fmt::Display for Cubelet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.0.map(Sign::int);
        write!(f, "({x}, {y}, {z})")
    }
}
impl Cubelet {
    /// Returns the location at the center of the cube, which has no facelets.
    pub const fn core() -> Self {
        Self([Sign::Zero; 3])
    }
    /// Constructs a cubelet from integer coordinates, returning `None` if any
    /// coordinate is out of range.
    pub fn from_ints([x, y, z]: [i8; 3]) -> Option<Self> {
        let [x, y, z] = [x, y, z].map(Sign::from_int);
        Some(Self([x?, y?, z?]))
    }
    /// Returns the coordinates of the cubelet as integers.
    pub fn ints(self) -> [i8; 3] {
        self.0.map(Sign::int)
    }
    /// Returns the number of facelets on this cubelet.
    pub fn facelet_count(self) -> usize {
        self.0.iter().filter(|s| s.is_nonzero()).count()
    }
    /// Returns the faces that this cubelet has facelets on.
    pub fn faces(self) -> impl Iterator<Item = Face> {
        Axis::iter().filter_map(move |axis| Face::from_normal(axis, self[axis]))
    }
    /// Returns the location of this cubelet after rotating it by some number
    /// of positive quarter turns about an axis.
    #[must_use]
    pub fn rotated(self, axis: Axis, quarter_turns: u8) -> Self {
        let [x, y, z] = rotate_vector(self.ints(), axis, quarter_turns);
        // Rotation preserves the range of each coordinate.
        Self([x, y, z].map(|i| Sign::from_int(i).unwrap_or_default()))
    }
    /// Returns an iterator over all 26 cubelets.
    pub fn iter() -> impl Iterator<Item = Self> {
        itertools::iproduct!(Sign::iter(), Sign::iter(), Sign::iter())
            .map(|(x, y, z)| Self([x, y, z]))
            .filter(|&c| c != Self::core())
    }
}

/// Location of a facelet: a cubelet and the face it points toward.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Facelet {
    /// Cubelet that the facelet is attached to.
    pub cubelet: Cubelet,
    /// Face that the facelet is on.
    pub face: Face,
}
impl Facelet {
    /// Returns the index of the facelet in a pattern string, in the range
    /// 0..54.
    pub fn index(self) -> usize {
        let (row_axis, row_first) = self.face.row_layout();
        let (col_axis, col_first) = self.face.col_layout();
        let row = 1 - (self.cubelet[row_axis] * row_first).int();
        let col = 1 - (self.cubelet[col_axis] * col_first).int();
        self.face.idx() * 9 + row as usize * 3 + col as usize
    }
    /// Returns the location of this facelet after rotating it by some number
    /// of positive quarter turns about an axis.
    #[must_use]
    pub fn rotated(self, axis: Axis, quarter_turns: u8) -> Self {
        let [x, y, z] = rotate_vector(self.face.normal(), axis, quarter_turns);
        let face = Axis::iter()
            .zip([x, y, z])
            .find_map(|(axis, i)| Face::from_normal(axis, Sign::from_int(i)?))
            .unwrap_or(self.face);
        Self {
            cubelet: self.cubelet.rotated(axis, quarter_turns),
            face,
        }
    }
    /// Returns all facelets in pattern-string order.
    pub fn all() -> &'static [Facelet; 54] {
        &FACELETS
    }
}

lazy_static! {
    static ref FACELETS: [Facelet; 54] = {
        let mut ret = [Facelet {
            cubelet: Cubelet::core(),
            face: Face::U,
        }; 54];
        for face in Face::iter() {
            for cubelet in Cubelet::iter().filter(|c| c[face.axis()] == face.sign()) {
                let facelet = Facelet { cubelet, face };
                ret[facelet.index()] = facelet;
            }
        }
        ret
    };
}
