//! The N×N×N cell grid.

use crate::error::MoveError;
use crate::types::{Cell, Coordinate, Player};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::instrument;

/// Edge length of the standard Qubic cube.
pub const STANDARD_SIZE: usize = 4;

/// An N×N×N board.
///
/// Cells are stored flat in x-major order, `index = (x * N + y) * N + z`.
/// The storage is shared between clones; [`Board::with`] is the only way to
/// obtain a board with different contents, so a snapshot never changes
/// under its holder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr", into = "BoardRepr")]
pub struct Board {
    size: usize,
    cells: Arc<[Cell]>,
}

impl Board {
    /// Creates a board of the given edge length with every cell empty.
    ///
    /// # Panics
    ///
    /// Panics if `size³` does not fit in a `usize`. Like any allocation, a
    /// size that fits can still exhaust memory.
    #[instrument]
    pub fn empty(size: usize) -> Self {
        let Some(len) = size.checked_pow(3) else {
            panic!("Board size {size} overflows the cell count");
        };
        Self {
            size,
            cells: vec![Cell::Empty; len].into(),
        }
    }

    /// Edge length N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true if every component of `coord` is in `[0, N)`.
    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.x < self.size && coord.y < self.size && coord.z < self.size
    }

    fn index(&self, coord: Coordinate) -> Result<usize, MoveError> {
        if self.contains(coord) {
            Ok((coord.x * self.size + coord.y) * self.size + coord.z)
        } else {
            Err(MoveError::OutOfBounds {
                coordinate: coord,
                size: self.size,
            })
        }
    }

    fn coordinate_of(&self, index: usize) -> Coordinate {
        let n = self.size;
        Coordinate::new(index / (n * n), (index / n) % n, index % n)
    }

    /// Reads a cell.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] if the coordinate is off the board.
    pub fn get(&self, coord: Coordinate) -> Result<Cell, MoveError> {
        let index = self.index(coord)?;
        Ok(self.cells[index])
    }

    /// Returns a new board identical to this one except at `coord`.
    ///
    /// `self` is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] if the coordinate is off the board.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn with(&self, coord: Coordinate, cell: Cell) -> Result<Self, MoveError> {
        let index = self.index(coord)?;
        let mut cells = self.cells.to_vec();
        cells[index] = cell;
        Ok(Self {
            size: self.size,
            cells: cells.into(),
        })
    }

    /// Checks if the cell at `coord` exists and is empty.
    pub fn is_empty_at(&self, coord: Coordinate) -> bool {
        matches!(self.get(coord), Ok(Cell::Empty))
    }

    /// All cells in storage order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Coordinates of every empty cell, in x-major order.
    pub fn empty_cells(&self) -> Vec<Coordinate> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(index, _)| self.coordinate_of(index))
            .collect()
    }

    /// Number of cells claimed by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Occupied(player))
            .count()
    }

    /// Checks if no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| *cell != Cell::Empty)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty(STANDARD_SIZE)
    }
}

/// Prints one block per x slice, rows along y, columns along z.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for x in 0..self.size {
            if x > 0 {
                writeln!(f)?;
            }
            writeln!(f, "x = {x}")?;
            for y in 0..self.size {
                let row: Vec<String> = (0..self.size)
                    .map(|z| {
                        let index = (x * self.size + y) * self.size + z;
                        self.cells[index].symbol().to_string()
                    })
                    .collect();
                writeln!(f, "  {}", row.join(" "))?;
            }
        }
        Ok(())
    }
}

/// Wire shape of a board: edge length plus the flat cell list.
#[derive(Serialize, Deserialize)]
struct BoardRepr {
    size: usize,
    cells: Vec<Cell>,
}

impl From<Board> for BoardRepr {
    fn from(board: Board) -> Self {
        Self {
            size: board.size,
            cells: board.cells.to_vec(),
        }
    }
}

impl TryFrom<BoardRepr> for Board {
    type Error = String;

    fn try_from(repr: BoardRepr) -> Result<Self, Self::Error> {
        let expected = repr
            .size
            .checked_pow(3)
            .ok_or_else(|| format!("board size {} is too large", repr.size))?;
        if repr.cells.len() != expected {
            return Err(format!(
                "board of size {} needs {} cells, got {}",
                repr.size,
                expected,
                repr.cells.len()
            ));
        }
        Ok(Self {
            size: repr.size,
            cells: repr.cells.into(),
        })
    }
}
