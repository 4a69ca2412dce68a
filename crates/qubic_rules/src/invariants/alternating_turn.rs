//! Alternating turn invariant: players alternate A, B, A, B, ...

use super::Invariant;
use crate::game::GameState;
use crate::types::Player;

/// Invariant: Players alternate turns.
///
/// The history must read A, B, A, B, ... While the game is in progress the
/// player to move is the one after the last mover. Once the game is over
/// the last mover is both the winner and the current player.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        let alternates = history.iter().enumerate().all(|(i, mov)| {
            let expected = if i % 2 == 0 {
                Player::PlayerA
            } else {
                Player::PlayerB
            };
            mov.player == expected
        });
        if !alternates {
            return false;
        }

        match history.last() {
            None => !state.is_game_over() && state.current_player() == Player::PlayerA,
            Some(last) if state.is_game_over() => {
                state.winner() == Some(last.player) && state.current_player() == last.player
            }
            Some(last) => state.winner().is_none() && state.current_player() == last.player.opponent(),
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (A, B, A, B, ...)"
    }
}
