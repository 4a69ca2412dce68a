//! Core domain types for Qubic.

use derive_more::Display;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Player {
    /// First player (always moves first after a reset).
    #[display("Player A")]
    PlayerA,
    /// Second player.
    #[display("Player B")]
    PlayerB,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::PlayerA => Player::PlayerB,
            Player::PlayerB => Player::PlayerA,
        }
    }

    /// Single-character mark used in text output.
    pub fn symbol(self) -> char {
        match self {
            Player::PlayerA => 'A',
            Player::PlayerB => 'B',
        }
    }
}

/// A cell of the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Unclaimed cell.
    #[default]
    Empty,
    /// Cell claimed by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns the owning player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    /// Character used in text output.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(player) => player.symbol(),
        }
    }
}

/// A 0-based cell address `(x, y, z)`.
///
/// A coordinate carries no size; whether it is in range is decided by the
/// board it is used against.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize, new,
)]
#[display("({x}, {y}, {z})")]
pub struct Coordinate {
    /// Index along the first axis (selects the slice).
    pub x: usize,
    /// Index along the second axis.
    pub y: usize,
    /// Index along the third axis.
    pub z: usize,
}

impl From<(usize, usize, usize)> for Coordinate {
    fn from((x, y, z): (usize, usize, usize)) -> Self {
        Self { x, y, z }
    }
}

/// A move: a player claiming a cell.
///
/// Kept on the game state for display and replay; it has no effect on
/// later rule evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize, new)]
#[display("{player} -> {coordinate}")]
pub struct Move {
    /// The claimed cell.
    pub coordinate: Coordinate,
    /// The player who claimed it.
    pub player: Player,
}
