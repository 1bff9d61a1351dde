//! Sign and direction enums.

use std::ops::{Mul, Neg};

/// Negative, zero, or positive.
///
/// This is used for layer positions along an axis, where zero is the middle
/// slice.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sign {
    /// Negative.
    Neg = -1,
    /// Zero.
    #[default]
    Zero = 0,
    /// Positive.
    Pos = 1,
}
impl Neg for Sign {
    type Output = Sign;
    fn neg(self) -> Sign {
        match self {
            Sign::Neg => Sign::Pos,
            Sign::Zero => Sign::Zero,
            Sign::Pos => Sign::Neg,
        }
    }
}
impl Mul<Sign> for Sign {
    type Output = Sign;
    fn mul(self, rhs: Sign) -> Sign {
        match self {
            Sign::Neg => -rhs,
            Sign::Zero => Sign::Zero,
            Sign::Pos => rhs,
        }
    }
}
impl Sign {
    /// Returns an integer representation of the sign (either -1, 0, or 1).
    pub const fn int(self) -> i8 {
        match self {
            Sign::Neg => -1,
            Sign::Zero => 0,
            Sign::Pos => 1,
        }
    }
    /// Returns a floating-point representation of the sign (either -1.0, 0.0,
    /// or 1.0).
    pub const fn float(self) -> f32 {
        self.int() as f32
    }
    /// Returns the sign in the range 0..3, for indexing arrays ordered from
    /// negative to positive.
    pub const fn idx(self) -> usize {
        (self.int() + 1) as usize
    }
    /// Returns the sign of an integer, or `None` if it is not -1, 0, or 1.
    pub const fn from_int(i: i8) -> Option<Self> {
        match i {
            -1 => Some(Sign::Neg),
            0 => Some(Sign::Zero),
            1 => Some(Sign::Pos),
            _ => None,
        }
    }
    /// Returns the sign of a floating-point number. NaN and both zeros map to
    /// [`Sign::Zero`].
    pub fn of_f32(x: f32) -> Self {
        if x > 0.0 {
            Sign::Pos
        } else if x < 0.0 {
            Sign::Neg
        } else {
            Sign::Zero
        }
    }
    /// Returns true if `Sign::Zero` or false otherwise.
    pub const fn is_zero(self) -> bool {
        matches!(self, Sign::Zero)
    }
    /// Returns false if `Sign::Zero` or true otherwise.
    pub const fn is_nonzero(self) -> bool {
        !self.is_zero()
    }

    /// Returns an iterator over all signs.
    pub fn iter() -> impl Clone + Iterator<Item = Sign> {
        [Sign::Neg, Sign::Zero, Sign::Pos].into_iter()
    }
}

/// Turn sense of a rotation about the positive end of an axis, using the
/// right-hand rule.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Counterclockwise when viewed from the positive end of the axis.
    Pos,
    /// Clockwise when viewed from the positive end of the axis.
    Neg,
}
impl Neg for Direction {
    type Output = Direction;
    fn neg(self) -> Direction {
        self.rev()
    }
}
impl Mul<Direction> for Direction {
    type Output = Direction;
    fn mul(self, rhs: Direction) -> Direction {
        match self {
            Direction::Pos => rhs,
            Direction::Neg => rhs.rev(),
        }
    }
}
impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn rev(self) -> Self {
        match self {
            Direction::Pos => Direction::Neg,
            Direction::Neg => Direction::Pos,
        }
    }
    /// Returns an integer representation of the direction (either -1 or 1).
    pub const fn int(self) -> i8 {
        match self {
            Direction::Pos => 1,
            Direction::Neg => -1,
        }
    }
    /// Returns a floating-point representation of the direction (either -1.0
    /// or 1.0).
    pub const fn float(self) -> f32 {
        self.int() as f32
    }
    /// Converts a nonzero sign to a direction.
    pub const fn from_sign(sign: Sign) -> Option<Self> {
        match sign {
            Sign::Neg => Some(Direction::Neg),
            Sign::Zero => None,
            Sign::Pos => Some(Direction::Pos),
        }
    }
    /// Returns the direction as a sign, which is never [`Sign::Zero`].
    pub const fn sign(self) -> Sign {
        match self {
            Direction::Pos => Sign::Pos,
            Direction::Neg => Sign::Neg,
        }
    }
}
