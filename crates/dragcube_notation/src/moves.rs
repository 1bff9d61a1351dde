//! Moves and their notation.

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use smallvec::SmallVec;

use crate::{Axis, Direction, MoveFamily, NotationError, NotationTable, Sign};

/// Single quarter-turn token, such as `R` or `U'`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// Layer being turned.
    pub family: MoveFamily,
    /// Whether the token carries an inversion mark.
    pub inverted: bool,
}
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.family)?;
        if self.inverted {
            write!(f, "'")?;
        }
        Ok(())
    }
}

/// Turn of one layer by a whole number of quarter turns.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    /// Axis of rotation.
    pub axis: Axis,
    /// Layer along the axis.
    pub layer: Sign,
    /// Turn sense about the positive end of the axis.
    pub direction: Direction,
    /// Number of quarter turns, from 1 to 3.
    quarter_turns: u8,
}

impl Move {
    /// Constructs a move, returning an error if `quarter_turns` is not in the
    /// range 1..=3.
    pub fn new(
        axis: Axis,
        layer: Sign,
        direction: Direction,
        quarter_turns: u8,
    ) -> Result<Self, NotationError> {
        if !(1..=3).contains(&quarter_turns) {
            return Err(NotationError::QuarterTurnsOutOfRange(quarter_turns));
        }
        Ok(Self {
            axis,
            layer,
            direction,
            quarter_turns,
        })
    }

    /// Constructs a single quarter turn of a layer.
    pub fn quarter_turn(axis: Axis, layer: Sign, direction: Direction) -> Self {
        Self {
            axis,
            layer,
            direction,
            quarter_turns: 1,
        }
    }

    /// Constructs a single quarter turn of a move family, inverted or not.
    pub fn quarter(family: MoveFamily, inverted: bool) -> Self {
        let (axis, layer) = family.layer();
        let base = family.base_direction();
        Self::quarter_turn(axis, layer, if inverted { base.rev() } else { base })
    }

    /// Returns the number of quarter turns.
    pub fn quarter_turns(self) -> u8 {
        self.quarter_turns
    }

    /// Returns the move family turned by this move.
    pub fn family(self) -> MoveFamily {
        NotationTable::lookup(self.axis, self.layer).0
    }

    /// Returns the quarter-turn token that this move repeats.
    pub fn token(self) -> Token {
        let (family, base) = NotationTable::lookup(self.axis, self.layer);
        Token {
            family,
            inverted: self.direction != base,
        }
    }

    /// Returns the tokens that serialize this move, one per quarter turn.
    pub fn tokens(self) -> SmallVec<[Token; 3]> {
        std::iter::repeat_n(self.token(), self.quarter_turns as usize).collect()
    }

    /// Returns the shortest single token with the same effect, such as `R2`
    /// for a double turn or `U` for three quarter turns of `U'`.
    pub fn compact(self) -> String {
        match self.quarter_turns {
            2 => format!("{}2", self.family()),
            3 => self.inverse().token().to_string(),
            _ => self.token().to_string(),
        }
    }

    /// Returns the inverse move: same axis, layer, and quarter-turn count with
    /// the opposite direction.
    #[must_use]
    pub fn inverse(self) -> Self {
        Self {
            direction: self.direction.rev(),
            ..self
        }
    }

    /// Returns the signed rotation angle of the move in radians, about the
    /// positive end of its axis.
    pub fn angle(self) -> f32 {
        self.direction.float() * self.quarter_turns as f32 * std::f32::consts::FRAC_PI_2
    }

    /// Returns the signed number of quarter turns about the positive end of
    /// the axis, normalized to the range 0..4.
    pub fn signed_quarter_turns(self) -> u8 {
        match self.direction {
            Direction::Pos => self.quarter_turns,
            Direction::Neg => 4 - self.quarter_turns,
        }
    }
}

impl fmt::Display for Move {
    /// Formats the move as its quarter-turn token, repeated and separated by
    /// spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens().iter().join(" "))
    }
}

impl FromStr for Move {
    type Err = NotationError;

    /// Parses a single token such as `R`, `U'`, `F2`, `M2'`, or `B'2`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let first = chars.next().ok_or(NotationError::Empty)?;
        let family = MoveFamily::from_letter(first).ok_or(NotationError::UnknownFamily(first))?;

        let suffix = chars.as_str();
        let bad_suffix = || NotationError::BadSuffix(suffix.to_owned());

        let (inverted, count) = match suffix.strip_suffix('\'') {
            Some(rest) => (true, rest),
            None => match suffix.strip_prefix('\'') {
                Some(rest) => (true, rest),
                None => (false, suffix),
            },
        };
        let quarter_turns = match count {
            "" => 1,
            digits if digits.chars().all(|c| c.is_ascii_digit()) => {
                digits.parse::<u8>().map_err(|_| bad_suffix())?
            }
            _ => return Err(bad_suffix()),
        };

        let m = Move::quarter(family, inverted);
        Move::new(m.axis, m.layer, m.direction, quarter_turns)
    }
}

/// Parses a whitespace-separated list of moves.
pub fn parse_moves(s: &str) -> Result<Vec<Move>, NotationError> {
    s.split_whitespace().map(str::parse).collect()
}

/// Parses a list of move tokens, each of which may itself contain several
/// whitespace-separated moves.
pub fn parse_move_list<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Move>, NotationError> {
    tokens
        .iter()
        .map(|s| parse_moves(s.as_ref()))
        .flatten_ok()
        .collect()
}

/// Formats a list of moves as space-separated quarter-turn tokens.
pub fn format_moves<'a>(moves: impl IntoIterator<Item = &'a Move>) -> String {
    moves.into_iter().join(" ")
}
