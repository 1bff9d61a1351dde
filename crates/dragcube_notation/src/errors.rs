use thiserror::Error;

/// Error produced when parsing a move token.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum NotationError {
    /// Token is empty
    #[error("empty move token")]
    Empty,
    /// First character does not name a move family
    #[error("unknown move family {0:?}")]
    UnknownFamily(char),
    /// Characters after the family letter are not a valid suffix
    #[error("invalid suffix {0:?} (expected `'`, a multiplier from 1 to 3, or both)")]
    BadSuffix(String),
    /// Quarter-turn count outside of 1..=3
    #[error("quarter-turn count {0} out of range (expected 1 to 3)")]
    QuarterTurnsOutOfRange(u8),
}
