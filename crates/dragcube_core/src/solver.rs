//! Solvers that produce a move list returning a cube to the solved state.

use dragcube_notation::{Move, MoveFamily, parse_move_list};
use itertools::Itertools;
use strum::IntoEnumIterator;

use crate::{CubeState, SolverError};

/// Source of solutions for a cube pattern.
pub trait Solver {
    /// Returns notation tokens that take the cube with the given pattern
    /// string to the solved state.
    fn solve(&self, pattern: &str) -> Result<Vec<String>, SolverError>;
}

/// Solves a cube and parses the solution into moves.
///
/// Returns [`SolverError::MalformedOutput`] if the solver returns a token that
/// is not valid notation. The state is never modified.
pub fn solution_moves(
    solver: &(impl Solver + ?Sized),
    state: &CubeState,
) -> Result<Vec<Move>, SolverError> {
    let tokens = solver.solve(&state.as_string())?;
    tokens
        .iter()
        .map(|token| {
            parse_move_list(&[token]).map_err(|e| SolverError::MalformedOutput {
                token: token.clone(),
                reason: e.to_string(),
            })
        })
        .flatten_ok()
        .collect()
}

/// Iterative-deepening search over outer-face turns.
///
/// Only practical for shallow states, such as a cube that has been turned a
/// few times by hand.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BoundedSolver {
    /// Maximum solution length, in outer-face moves.
    pub max_depth: usize,
}
impl Default for BoundedSolver {
    fn default() -> Self {
        Self { max_depth: 5 }
    }
}
impl Solver for BoundedSolver {
    fn solve(&self, pattern: &str) -> Result<Vec<String>, SolverError> {
        let state = CubeState::from_pattern(pattern)?;
        let moves = outer_moves();

        let mut path = vec![];
        for depth in 0..=self.max_depth {
            if search(&state, depth, &moves, &mut path) {
                log::debug!("found solution of length {depth}");
                return Ok(path.into_iter().map(Move::compact).collect());
            }
        }
        Err(SolverError::NoSolution {
            max_depth: self.max_depth,
        })
    }
}

/// Returns every quarter, inverted quarter, and double turn of the outer
/// faces.
fn outer_moves() -> Vec<Move> {
    MoveFamily::iter()
        .filter(|f| f.is_outer())
        .flat_map(|family| {
            let quarter = Move::quarter(family, false);
            [
                Some(quarter),
                Some(quarter.inverse()),
                Move::new(quarter.axis, quarter.layer, quarter.direction, 2).ok(),
            ]
        })
        .flatten()
        .collect()
}

fn search(state: &CubeState, depth: usize, moves: &[Move], path: &mut Vec<Move>) -> bool {
    if depth == 0 {
        return state.is_solved();
    }
    for &m in moves {
        if let Some(prev) = path.last() {
            // Skip turning the same face twice in a row, and only visit
            // commuting opposite faces in one order.
            if prev.family() == m.family() || (prev.axis == m.axis && prev.family() > m.family())
            {
                continue;
            }
        }
        path.push(m);
        if search(&state.with_move(m), depth - 1, moves, path) {
            return true;
        }
        path.pop();
    }
    false
}
