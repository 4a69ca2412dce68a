//! Error taxonomy for moves.

use crate::types::Coordinate;

/// Error that can occur when validating or applying a move.
///
/// Every variant is returned alongside an untouched prior state.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// A coordinate component is outside `[0, size)`.
    #[display("Coordinate {coordinate} is out of bounds for a {size}x{size}x{size} board")]
    OutOfBounds {
        /// The rejected coordinate.
        coordinate: Coordinate,
        /// Edge length of the board it was checked against.
        size: usize,
    },

    /// The target cell is already claimed.
    #[display("Cell {} is already occupied", _0)]
    AlreadyOccupied(Coordinate),

    /// The state was built for a different board size than the controller.
    #[display("Board size {actual} does not match the controller's size {expected}")]
    SizeMismatch {
        /// Edge length the controller's winning lines were built for.
        expected: usize,
        /// Edge length of the state's board.
        actual: usize,
    },

    /// A move was attempted after the game was won.
    #[display("Game is already over")]
    GameOver,

    /// A postcondition failed after applying a move (debug builds only).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
