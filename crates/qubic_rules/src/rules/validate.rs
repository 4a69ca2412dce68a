//! Move validation.

use crate::board::Board;
use crate::error::MoveError;
use crate::types::{Cell, Coordinate};
use tracing::instrument;

/// Checks that `coord` is on the board and unclaimed.
///
/// Pure: the board is only read.
///
/// # Errors
///
/// - [`MoveError::OutOfBounds`] if any component is outside `[0, N)`.
/// - [`MoveError::AlreadyOccupied`] if the cell is not empty.
#[instrument(skip(board), fields(size = board.size()))]
pub fn validate(board: &Board, coord: Coordinate) -> Result<(), MoveError> {
    match board.get(coord)? {
        Cell::Empty => Ok(()),
        Cell::Occupied(_) => Err(MoveError::AlreadyOccupied(coord)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    #[test]
    fn test_empty_cell_is_valid() {
        let board = Board::empty(4);
        assert_eq!(validate(&board, Coordinate::new(3, 3, 3)), Ok(()));
    }

    #[test]
    fn test_out_of_bounds_on_each_axis() {
        let board = Board::empty(4);
        for coord in [
            Coordinate::new(4, 0, 0),
            Coordinate::new(0, 4, 0),
            Coordinate::new(0, 0, 4),
        ] {
            assert_eq!(
                validate(&board, coord),
                Err(MoveError::OutOfBounds {
                    coordinate: coord,
                    size: 4
                })
            );
        }
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let coord = Coordinate::new(2, 1, 0);
        let board = Board::empty(4)
            .with(coord, Cell::Occupied(Player::PlayerB))
            .unwrap();
        assert_eq!(validate(&board, coord), Err(MoveError::AlreadyOccupied(coord)));
    }
}
