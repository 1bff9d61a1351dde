//! Random shuffle generation.

use dragcube_notation::{Move, MoveFamily};
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;
use strum::IntoEnumIterator;

/// Suffixes that a shuffle token may carry, as quarter turns of the
/// uninverted token.
const SUFFIX_QUARTER_TURNS: [(bool, u8); 3] = [(false, 1), (true, 1), (false, 2)];

/// Generates `len` random outer-face moves, each a quarter turn, an inverted
/// quarter turn, or a double turn. No two consecutive moves turn the same face.
pub fn shuffle_moves(len: usize, rng: &mut impl Rng) -> Vec<Move> {
    let faces: Vec<MoveFamily> = MoveFamily::iter().filter(|f| f.is_outer()).collect();

    let mut ret: Vec<Move> = Vec::with_capacity(len);
    while ret.len() < len {
        let Some(&family) = faces.choose(rng) else {
            break;
        };
        if ret.last().is_some_and(|prev| prev.family() == family) {
            continue;
        }
        let &(inverted, quarter_turns) = SUFFIX_QUARTER_TURNS
            .choose(rng)
            .unwrap_or(&SUFFIX_QUARTER_TURNS[0]);
        let Move {
            axis,
            layer,
            direction,
            ..
        } = Move::quarter(family, inverted);
        match Move::new(axis, layer, direction, quarter_turns) {
            Ok(m) => ret.push(m),
            Err(e) => {
                log::error!("error generating shuffle move: {e}");
                break;
            }
        }
    }
    ret
}

/// Generates a shuffle from a seed. The same seed always produces the same
/// shuffle.
pub fn seeded_shuffle(len: usize, seed: u64) -> Vec<Move> {
    shuffle_moves(len, &mut ChaCha12Rng::seed_from_u64(seed))
}

/// Generates a shuffle using the thread-local random number generator.
pub fn random_shuffle(len: usize) -> Vec<Move> {
    shuffle_moves(len, &mut rand::rng())
}
