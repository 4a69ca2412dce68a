//! Game state and the controller that advances it.
//!
//! [`GameState`] is an immutable snapshot. [`GameController::apply_move`]
//! never modifies the state it is given; it returns a new one, so a holder
//! of an older snapshot always sees a complete, consistent game.

use crate::board::Board;
use crate::contracts::{Contract, MoveContract};
use crate::error::MoveError;
use crate::rules::{Line, WinDetector};
use crate::types::{Cell, Coordinate, Move, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// Moves are accepted.
    #[display("In progress")]
    InProgress,
    /// A player completed a line. Terminal until reset.
    #[display("{} wins", _0)]
    Won(Player),
}

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) last_move: Option<Move>,
    pub(crate) game_over: bool,
    pub(crate) winner: Option<Player>,
    pub(crate) history: Vec<Move>,
}

impl GameState {
    /// Creates the initial state: empty board, Player A to move.
    #[instrument]
    pub fn new(size: usize) -> Self {
        Self {
            board: Board::empty(size),
            current_player: Player::PlayerA,
            last_move: None,
            game_over: false,
            winner: None,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move, or the winner once the game is over.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the most recent accepted move.
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Returns true once a player has won.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Returns the accepted moves since the last reset.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        match self.winner {
            Some(player) if self.game_over => GameStatus::Won(player),
            _ => GameStatus::InProgress,
        }
    }

    /// Cells the current player may claim. Empty once the game is over.
    pub fn legal_moves(&self) -> Vec<Coordinate> {
        if self.game_over {
            Vec::new()
        } else {
            self.board.empty_cells()
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(crate::board::STANDARD_SIZE)
    }
}

/// Qubic game engine.
///
/// Holds the winning lines for one board size and sequences every move
/// through validation, mutation, win detection and turn alternation. It
/// owns no game state; callers thread [`GameState`] values through it.
#[derive(Debug, Clone)]
pub struct GameController {
    detector: WinDetector,
}

impl GameController {
    /// Creates a controller for boards of the given edge length.
    #[instrument]
    pub fn new(size: usize) -> Self {
        Self {
            detector: WinDetector::new(size),
        }
    }

    /// Board edge length this controller plays on.
    pub fn size(&self) -> usize {
        self.detector.size()
    }

    /// Returns the win detector.
    pub fn detector(&self) -> &WinDetector {
        &self.detector
    }

    /// Returns a fresh initial state. Never fails.
    #[instrument(skip(self), fields(size = self.size()))]
    pub fn reset(&self) -> GameState {
        GameState::new(self.size())
    }

    /// Claims `coord` for the player to move and returns the next state.
    ///
    /// A winning move ends the game and leaves `current_player` on the
    /// winner; any other move hands the turn to the opponent.
    ///
    /// # Errors
    ///
    /// - [`MoveError::SizeMismatch`] if `state` was built for another size.
    /// - [`MoveError::GameOver`] if the game has already been won.
    /// - [`MoveError::OutOfBounds`] / [`MoveError::AlreadyOccupied`] from
    ///   validation.
    /// - [`MoveError::InvariantViolation`] if a postcondition fails (debug
    ///   builds only).
    ///
    /// In every error case `state` is unchanged.
    #[instrument(skip(self, state), fields(player = %state.current_player))]
    pub fn apply_move(&self, state: &GameState, coord: Coordinate) -> Result<GameState, MoveError> {
        if state.board.size() != self.size() {
            return Err(MoveError::SizeMismatch {
                expected: self.size(),
                actual: state.board.size(),
            });
        }
        MoveContract::pre(state, &coord)?;

        let player = state.current_player;
        let board = state.board.with(coord, Cell::Occupied(player))?;
        let action = Move::new(coord, player);
        let mut history = state.history.clone();
        history.push(action);

        let won = self.detector.check_win(&board, player);
        let next = GameState {
            board,
            current_player: if won { player } else { player.opponent() },
            last_move: Some(action),
            game_over: won,
            winner: won.then_some(player),
            history,
        };
        if won {
            debug!(%action, "Winning move");
        }

        #[cfg(debug_assertions)]
        MoveContract::post(state, &next)?;

        Ok(next)
    }

    /// Replays coordinates from the initial state.
    ///
    /// # Errors
    ///
    /// Stops at the first rejected move and returns its error.
    #[instrument(skip(self, moves), fields(moves = moves.len()))]
    pub fn replay(&self, moves: &[Coordinate]) -> Result<GameState, MoveError> {
        moves
            .iter()
            .try_fold(self.reset(), |state, coord| self.apply_move(&state, *coord))
    }

    /// Returns the line that won the game, for highlighting.
    pub fn winning_line<'a>(&'a self, state: &GameState) -> Option<&'a Line> {
        let winner = state.winner()?;
        self.detector.winning_line(state.board(), winner)
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new(crate::board::STANDARD_SIZE)
    }
}
