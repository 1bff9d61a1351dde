//! Known patterns and move sequences.

use dragcube_notation::{Move, NotationError, parse_move_list};

pub use crate::state::SOLVED_PATTERN;

/// Pattern shown after applying [`RUBICON_SETUP`] to the solved cube.
pub const RUBICON_PATTERN: &str = "URDBUFBLLBUBLRLFDDRUUBFFDDRLRUFDBBDRFUURLLDRFRULDBBFFL";

/// Moves that take the solved cube to [`RUBICON_PATTERN`].
pub const RUBICON_SETUP: &[&str] = &["F", "L", "B", "R", "F", "L", "B"];

/// Inverse of [`RUBICON_SETUP`].
pub const RUBICON_SOLVE: &[&str] = &["B'", "L'", "F'", "R'", "B'", "L'", "F'"];

/// T-permutation performed twice, which has no net effect.
pub const FALSE_SHUFFLE: &[&str] = &[
    "R", "U", "R'", "U'", "R'", "F", "R2", "U'", "R'", "U'", "R", "U", "R'", "F'", //
    "R", "U", "R'", "U'", "R'", "F", "R2", "U'", "R'", "U'", "R", "U", "R'", "F'",
];

/// Number of moves of [`RUBICON_SOLVE`] played before [`FALSE_SHUFFLE`] in
/// [`extended_rubicon_solve`].
const EXTENDED_SOLVE_SPLIT: usize = 3;

/// Returns a solution for [`RUBICON_PATTERN`] that looks more impressive: the
/// first moves of [`RUBICON_SOLVE`], then [`FALSE_SHUFFLE`], then the rest.
pub fn extended_rubicon_solve() -> Vec<&'static str> {
    let (head, tail) = RUBICON_SOLVE.split_at(EXTENDED_SOLVE_SPLIT);
    [head, FALSE_SHUFFLE, tail].concat()
}

/// Returns the demonstration sequence: [`RUBICON_SETUP`] followed by
/// [`RUBICON_SOLVE`].
pub fn rubicon_setup_and_solve() -> Vec<&'static str> {
    [RUBICON_SETUP, RUBICON_SOLVE].concat()
}

/// Parses one of the sequences in this module.
pub fn moves_of(tokens: &[&str]) -> Result<Vec<Move>, NotationError> {
    parse_move_list(tokens)
}
