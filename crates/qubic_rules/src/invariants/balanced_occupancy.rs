//! Balanced occupancy invariant: Player A leads by at most one cell.

use super::Invariant;
use crate::game::GameState;
use crate::types::Player;

/// Invariant: Player A owns as many cells as Player B, or one more.
///
/// Player A always moves first, so after any sequence of alternating moves
/// the counts differ by zero or one in A's favour.
pub struct BalancedOccupancyInvariant;

impl Invariant<GameState> for BalancedOccupancyInvariant {
    fn holds(state: &GameState) -> bool {
        let a = state.board().count(Player::PlayerA);
        let b = state.board().count(Player::PlayerB);
        a == b || a == b + 1
    }

    fn description() -> &'static str {
        "Player A owns as many cells as Player B, or one more"
    }
}
