//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! `{P} action {Q}`.

use crate::error::MoveError;
use crate::game::GameState;
use crate::invariants::{InvariantSet, QubicInvariants};
use crate::rules::validate;
use crate::types::Coordinate;
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Contract for claiming a cell.
///
/// Preconditions:
/// - the game is not over
/// - the cell is on the board and empty
///
/// Postconditions:
/// - exactly one move was added to the history
/// - every [`QubicInvariants`] member holds
pub struct MoveContract;

impl Contract<GameState, Coordinate> for MoveContract {
    #[instrument(skip(state))]
    fn pre(state: &GameState, action: &Coordinate) -> Result<(), MoveError> {
        if state.is_game_over() {
            return Err(MoveError::GameOver);
        }
        validate(state.board(), *action)
    }

    #[instrument(skip_all)]
    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        if after.history().len() != before.history().len() + 1 {
            warn!(
                before = before.history().len(),
                after = after.history().len(),
                "History did not grow by one move"
            );
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: history must grow by exactly one move".to_string(),
            ));
        }

        QubicInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Invariant violated after move");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameController;

    #[test]
    fn test_precondition_empty_cell() {
        let state = GameController::new(4).reset();
        assert!(MoveContract::pre(&state, &Coordinate::new(2, 2, 2)).is_ok());
    }

    #[test]
    fn test_precondition_game_over_checked_first() {
        let controller = GameController::new(1);
        let won = controller
            .apply_move(&controller.reset(), Coordinate::new(0, 0, 0))
            .unwrap();
        assert!(won.is_game_over());
        // Out of range too, but the terminal state wins.
        assert_eq!(
            MoveContract::pre(&won, &Coordinate::new(5, 5, 5)),
            Err(MoveError::GameOver)
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let controller = GameController::new(4);
        let before = controller.reset();
        let after = controller
            .apply_move(&before, Coordinate::new(0, 1, 2))
            .unwrap();
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_rejects_unchanged_state() {
        let state = GameController::new(4).reset();
        assert!(matches!(
            MoveContract::post(&state, &state),
            Err(MoveError::InvariantViolation(_))
        ));
    }
}
