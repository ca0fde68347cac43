//! Error types for the rules engine and AI selector.

/// Error returned when a move cannot be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The index is outside 0-8.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfRange(#[error(not(source))] usize),

    /// The square at the index already holds a mark.
    #[display("Square {} is already occupied", _0)]
    Occupied(#[error(not(source))] usize),
}

/// Error returned when the AI is asked to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum AiError {
    /// The board has no empty square.
    #[display("No legal move: the board is full")]
    NoLegalMove,
}
