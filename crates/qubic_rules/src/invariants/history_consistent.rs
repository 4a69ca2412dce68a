//! History consistency invariant: the board is exactly the replayed history.

use super::Invariant;
use crate::board::Board;
use crate::game::GameState;
use crate::types::Cell;

/// Invariant: replaying the move history onto an empty board reproduces the
/// current board, every move lands on an empty cell, and the last move is
/// the tail of the history.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let mut reconstructed = Board::empty(state.board().size());

        for mov in state.history() {
            if !reconstructed.is_empty_at(mov.coordinate) {
                return false;
            }
            reconstructed = match reconstructed.with(mov.coordinate, Cell::Occupied(mov.player)) {
                Ok(board) => board,
                Err(_) => return false,
            };
        }

        reconstructed == *state.board() && state.last_move() == state.history().last().copied()
    }

    fn description() -> &'static str {
        "Board and last move match the replayed move history"
    }
}
