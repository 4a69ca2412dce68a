//! Win detection for Qubic.
//!
//! The winning-line set is built once per board size and reused for every
//! check. It consists of three families:
//!
//! - every axis-aligned line (`3 * N^2`),
//! - the two diagonals of each slice with a fixed x (`2 * N`),
//! - the four space diagonals.
//!
//! Diagonals of slices with a fixed y or z are not winning lines.

use crate::board::Board;
use crate::types::{Cell, Coordinate, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// The family a winning line belongs to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[strum(serialize_all = "kebab-case")]
pub enum LineFamily {
    /// N cells varying along a single axis.
    Axis,
    /// A diagonal of a slice with fixed x.
    SliceDiagonal,
    /// A corner-to-corner diagonal through the cube.
    SpaceDiagonal,
}

/// An ordered run of N cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Line {
    /// Which family the line was enumerated in.
    family: LineFamily,
    /// The N cells, in enumeration order.
    cells: Vec<Coordinate>,
}

impl Line {
    fn new(family: LineFamily, cells: impl IntoIterator<Item = Coordinate>) -> Self {
        Self {
            family,
            cells: cells.into_iter().collect(),
        }
    }

    /// Checks if every cell of the line belongs to `player`.
    ///
    /// An empty line, or a line reaching off the board, is never owned.
    pub fn is_owned_by(&self, board: &Board, player: Player) -> bool {
        !self.cells.is_empty()
            && self
                .cells
                .iter()
                .all(|coord| board.get(*coord) == Ok(Cell::Occupied(player)))
    }
}

/// Precomputed winning lines for one board size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinDetector {
    size: usize,
    lines: Vec<Line>,
}

impl WinDetector {
    /// Enumerates the winning lines of an N-cube.
    #[instrument]
    pub fn new(size: usize) -> Self {
        let n = size;
        let last = n.saturating_sub(1);
        let mut lines = Vec::with_capacity(3 * n * n + 2 * n + 4);

        // Along z, then y, then x.
        for a in 0..n {
            for b in 0..n {
                lines.push(Line::new(
                    LineFamily::Axis,
                    (0..n).map(|i| Coordinate::new(a, b, i)),
                ));
            }
        }
        for a in 0..n {
            for b in 0..n {
                lines.push(Line::new(
                    LineFamily::Axis,
                    (0..n).map(|i| Coordinate::new(a, i, b)),
                ));
            }
        }
        for a in 0..n {
            for b in 0..n {
                lines.push(Line::new(
                    LineFamily::Axis,
                    (0..n).map(|i| Coordinate::new(i, a, b)),
                ));
            }
        }

        for x in 0..n {
            lines.push(Line::new(
                LineFamily::SliceDiagonal,
                (0..n).map(|i| Coordinate::new(x, i, i)),
            ));
            lines.push(Line::new(
                LineFamily::SliceDiagonal,
                (0..n).map(|i| Coordinate::new(x, i, last - i)),
            ));
        }

        let space: [fn(usize, usize) -> Coordinate; 4] = [
            |i, _| Coordinate::new(i, i, i),
            |i, last| Coordinate::new(i, i, last - i),
            |i, last| Coordinate::new(i, last - i, i),
            |i, last| Coordinate::new(i, last - i, last - i),
        ];
        for corner in space {
            lines.push(Line::new(
                LineFamily::SpaceDiagonal,
                (0..n).map(|i| corner(i, last)),
            ));
        }

        trace!(lines = lines.len(), "Enumerated winning lines");
        Self { size, lines }
    }

    /// Board edge length the lines were built for.
    pub fn size(&self) -> usize {
        self.size
    }

    /// All winning lines.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Number of lines in one family.
    pub fn count(&self, family: LineFamily) -> usize {
        self.lines.iter().filter(|l| l.family == family).count()
    }

    /// Checks if `player` owns a complete winning line.
    #[instrument(skip(self, board), fields(size = self.size))]
    pub fn check_win(&self, board: &Board, player: Player) -> bool {
        self.winning_line(board, player).is_some()
    }

    /// Returns the first winning line owned by `player`, if any.
    pub fn winning_line(&self, board: &Board, player: Player) -> Option<&Line> {
        self.lines.iter().find(|line| line.is_owned_by(board, player))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn claim(board: Board, player: Player, coords: &[(usize, usize, usize)]) -> Board {
        coords.iter().fold(board, |b, c| {
            b.with(Coordinate::from(*c), Cell::Occupied(player)).unwrap()
        })
    }

    #[test]
    fn test_line_counts() {
        for n in 1..=6 {
            let detector = WinDetector::new(n);
            assert_eq!(detector.count(LineFamily::Axis), 3 * n * n);
            assert_eq!(detector.count(LineFamily::SliceDiagonal), 2 * n);
            assert_eq!(detector.count(LineFamily::SpaceDiagonal), 4);
        }
        assert_eq!(WinDetector::new(4).lines().len(), 60);
    }

    #[test]
    fn test_every_line_has_n_cells_on_board() {
        let detector = WinDetector::new(4);
        let board = Board::empty(4);
        for line in detector.lines() {
            assert_eq!(line.cells().len(), 4);
            assert!(line.cells().iter().all(|c| board.contains(*c)));
        }
    }

    #[test]
    fn test_no_winner_empty_board() {
        let detector = WinDetector::new(4);
        let board = Board::empty(4);
        for player in Player::iter() {
            assert!(!detector.check_win(&board, player));
        }
    }

    #[test]
    fn test_axis_line_wins_for_owner_only() {
        let detector = WinDetector::new(4);
        let board = claim(
            Board::empty(4),
            Player::PlayerB,
            &[(2, 0, 1), (2, 1, 1), (2, 2, 1), (2, 3, 1)],
        );
        assert!(detector.check_win(&board, Player::PlayerB));
        assert!(!detector.check_win(&board, Player::PlayerA));
        let line = detector.winning_line(&board, Player::PlayerB).unwrap();
        assert_eq!(*line.family(), LineFamily::Axis);
    }

    #[test]
    fn test_x_slice_counter_diagonal_wins() {
        let detector = WinDetector::new(4);
        let board = claim(
            Board::empty(4),
            Player::PlayerA,
            &[(3, 0, 3), (3, 1, 2), (3, 2, 1), (3, 3, 0)],
        );
        let line = detector.winning_line(&board, Player::PlayerA).unwrap();
        assert_eq!(*line.family(), LineFamily::SliceDiagonal);
    }

    #[test]
    fn test_y_and_z_slice_diagonals_do_not_win() {
        let detector = WinDetector::new(4);
        let fixed_y = claim(
            Board::empty(4),
            Player::PlayerA,
            &[(0, 1, 0), (1, 1, 1), (2, 1, 2), (3, 1, 3)],
        );
        assert!(!detector.check_win(&fixed_y, Player::PlayerA));

        let fixed_z = claim(
            Board::empty(4),
            Player::PlayerA,
            &[(0, 3, 2), (1, 2, 2), (2, 1, 2), (3, 0, 2)],
        );
        assert!(!detector.check_win(&fixed_z, Player::PlayerA));
    }

    #[test]
    fn test_space_diagonals_win() {
        let detector = WinDetector::new(4);
        let diagonals: [[(usize, usize, usize); 4]; 4] = [
            [(0, 0, 0), (1, 1, 1), (2, 2, 2), (3, 3, 3)],
            [(0, 0, 3), (1, 1, 2), (2, 2, 1), (3, 3, 0)],
            [(0, 3, 0), (1, 2, 1), (2, 1, 2), (3, 0, 3)],
            [(0, 3, 3), (1, 2, 2), (2, 1, 1), (3, 0, 0)],
        ];
        for cells in diagonals {
            let board = claim(Board::empty(4), Player::PlayerB, &cells);
            let line = detector.winning_line(&board, Player::PlayerB).unwrap();
            assert_eq!(*line.family(), LineFamily::SpaceDiagonal);
        }
    }

    #[test]
    fn test_incomplete_line_does_not_win() {
        let detector = WinDetector::new(4);
        let board = claim(
            Board::empty(4),
            Player::PlayerA,
            &[(0, 0, 0), (0, 0, 1), (0, 0, 2)],
        );
        let board = claim(board, Player::PlayerB, &[(0, 0, 3)]);
        assert!(!detector.check_win(&board, Player::PlayerA));
        assert!(!detector.check_win(&board, Player::PlayerB));
    }

    #[test]
    fn test_size_zero_never_wins() {
        let detector = WinDetector::new(0);
        let board = Board::empty(0);
        assert!(!detector.check_win(&board, Player::PlayerA));
    }

    #[test]
    fn test_families_display() {
        let names: Vec<String> = LineFamily::iter().map(|f| f.to_string()).collect();
        assert_eq!(names, ["axis", "slice-diagonal", "space-diagonal"]);
    }
}
