use std::fmt;
use std::str::FromStr;

use dragcube_notation::{Move, NotationError, parse_moves};
use itertools::Itertools;
use smallvec::SmallVec;
use strum::IntoEnumIterator;

use crate::{Cubelet, Face, Facelet, PatternError};

/// Pattern string of the solved cube.
pub const SOLVED_PATTERN: &str = "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB";

/// Symbolic state of a 3x3x3 cube: the color of every facelet.
///
/// The pattern string lists facelets face by face in the order U, R, F, D, L,
/// B, each face row by row as seen from outside the cube.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CubeState {
    facelets: [Face; 54],
}
impl Default for CubeState {
    fn default() -> Self {
        Self::solved()
    }
}
impl fmt::Display for CubeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for face in self.facelets {
            write!(f, "{face}")?;
        }
        Ok(())
    }
}
impl FromStr for CubeState {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_pattern(s)
    }
}

impl CubeState {
    /// Returns the solved state.
    pub fn solved() -> Self {
        let mut facelets = [Face::U; 54];
        for (i, face) in Face::iter().enumerate() {
            facelets[i * 9..(i + 1) * 9].fill(face);
        }
        Self { facelets }
    }

    /// Constructs a state directly from a pattern string.
    ///
    /// This checks the length, the characters, and that every color appears
    /// exactly 9 times. It does not check that the pattern is reachable from
    /// the solved state.
    pub fn from_pattern(pattern: &str) -> Result<Self, PatternError> {
        let pattern = pattern.trim();
        let len = pattern.chars().count();
        if len != 54 {
            return Err(PatternError::WrongLength(len));
        }

        let mut facelets = [Face::U; 54];
        for (index, ch) in pattern.chars().enumerate() {
            facelets[index] =
                Face::from_char(ch).ok_or(PatternError::UnknownFacelet { index, ch })?;
        }

        let counts = facelets.iter().copied().counts();
        for face in Face::iter() {
            let count = counts.get(&face).copied().unwrap_or(0);
            if count != 9 {
                return Err(PatternError::WrongColorCount { face, count });
            }
        }

        Ok(Self { facelets })
    }

    /// Returns the pattern string for the state.
    pub fn as_string(&self) -> String {
        self.to_string()
    }

    /// Returns whether the state is solved.
    pub fn is_solved(&self) -> bool {
        Face::iter().all(|face| {
            let i = face.idx() * 9;
            self.facelets[i..i + 9].iter().all(|&f| f == face)
        })
    }

    /// Returns the color of a facelet.
    pub fn facelet(&self, facelet: Facelet) -> Face {
        self.facelets[facelet.index()]
    }

    /// Returns the colors of a cubelet's facelets, keyed by the face each one
    /// points toward.
    pub fn cubelet_colors(&self, cubelet: Cubelet) -> SmallVec<[(Face, Face); 3]> {
        cubelet
            .faces()
            .map(|face| (face, self.facelet(Facelet { cubelet, face })))
            .collect()
    }

    /// Applies a move in place.
    pub fn apply_move(&mut self, m: Move) {
        let quarter_turns = m.signed_quarter_turns();
        let old = self.facelets;
        for (i, &facelet) in Facelet::all().iter().enumerate() {
            if facelet.cubelet[m.axis] == m.layer {
                let dst = facelet.rotated(m.axis, quarter_turns);
                self.facelets[dst.index()] = old[i];
            }
        }
    }

    /// Applies a sequence of moves in place.
    pub fn apply_moves<'a>(&mut self, moves: impl IntoIterator<Item = &'a Move>) {
        for &m in moves {
            self.apply_move(m);
        }
    }

    /// Parses a whitespace-separated notation string and applies it.
    ///
    /// If the string fails to parse, the state is unchanged.
    pub fn apply(&mut self, notation: &str) -> Result<(), NotationError> {
        let moves = parse_moves(notation)?;
        self.apply_moves(&moves);
        Ok(())
    }

    /// Returns the state after applying a move, leaving `self` unchanged.
    #[must_use]
    pub fn with_move(&self, m: Move) -> Self {
        let mut ret = self.clone();
        ret.apply_move(m);
        ret
    }
}
