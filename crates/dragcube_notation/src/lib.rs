//! Face-turn notation for a 3x3x3 twisty puzzle cube.
//!
//! Every layer of the cube is addressed by an [`Axis`] and a layer position
//! [`Sign`] along that axis. The [`NotationTable`] maps each layer to a
//! [`MoveFamily`] letter and the turn sense of its uninverted token.

mod axis;
mod errors;
mod moves;
mod sign;
mod table;

pub use axis::Axis;
pub use errors::NotationError;
pub use moves::{Move, Token, format_moves, parse_move_list, parse_moves};
pub use sign::{Direction, Sign};
pub use table::{MoveFamily, NotationTable};
