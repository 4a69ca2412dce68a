//! Pure rules engine for Qubic, tic-tac-toe on an N×N×N cube.
//!
//! # Architecture
//!
//! - **Board**: the cell grid, with copy-on-write updates
//! - **Rules**: move validation and winning-line detection
//! - **Game**: immutable [`GameState`] snapshots and the
//!   [`GameController`] that moves from one to the next
//! - **Contracts**: move pre/postconditions backed by state invariants
//!
//! # Example
//!
//! ```
//! use qubic_rules::{Coordinate, GameController, Player};
//!
//! let controller = GameController::new(4);
//! let state = controller.reset();
//! let next = controller.apply_move(&state, Coordinate::new(0, 0, 0))?;
//! assert_eq!(next.current_player(), Player::PlayerB);
//! # Ok::<(), qubic_rules::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod contracts;
mod error;
mod game;
mod invariants;
mod rules;
mod types;

pub use board::{Board, STANDARD_SIZE};
pub use contracts::{Contract, MoveContract};
pub use error::MoveError;
pub use game::{GameController, GameState, GameStatus};
pub use invariants::{
    AlternatingTurnInvariant, BalancedOccupancyInvariant, HistoryConsistentInvariant, Invariant,
    InvariantSet, InvariantViolation, QubicInvariants,
};
pub use rules::{Line, LineFamily, WinDetector, validate};
pub use types::{Cell, Coordinate, Move, Player};
