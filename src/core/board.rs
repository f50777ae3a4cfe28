//! Board state and the rules that act on it: placement and win-line detection.

use core::fmt;

use super::common::{Cell, Mark, MoveError};
use super::config::{ANTI_DIAGONAL, BB, BOARD_SIZE, COL_LINES, MAIN_DIAGONAL, ROW_LINES};

/// A 3×3 tic-tac-toe grid, one occupancy mask per mark.
///
/// The masks never overlap and bits are only ever set, so a cell that has
/// left `Cell::Empty` stays marked until the board is dropped.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    x: BB,
    o: BB,
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Board {
            x: BB::new(),
            o: BB::new(),
        }
    }

    /// Occupancy mask of `mark`.
    pub fn marks(&self, mark: Mark) -> BB {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }

    /// Occupancy mask of both marks.
    pub fn occupied(&self) -> BB {
        self.x | self.o
    }

    /// Number of marked cells.
    pub fn filled(&self) -> usize {
        self.occupied().count_ones()
    }

    pub fn is_full(&self) -> bool {
        self.occupied() == BB::full()
    }

    /// State of the cell at (row, col).
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, MoveError> {
        if self.x.get(row, col)? {
            Ok(Cell::Marked(Mark::X))
        } else if self.o.get(row, col)? {
            Ok(Cell::Marked(Mark::O))
        } else {
            Ok(Cell::Empty)
        }
    }

    /// Write `mark` into (row, col).
    ///
    /// Coordinates come straight from user input and are validated here:
    /// anything outside `[0, 2]` is `OutOfRange`, a marked cell is
    /// `CellOccupied`. On error the board is left untouched.
    pub fn place_mark(&mut self, row: i64, col: i64, mark: Mark) -> Result<(), MoveError> {
        let (r, c) = match (usize::try_from(row), usize::try_from(col)) {
            (Ok(r), Ok(c)) if r < BOARD_SIZE && c < BOARD_SIZE => (r, c),
            _ => return Err(MoveError::OutOfRange { row, col }),
        };
        if !self.cell(r, c)?.is_empty() {
            return Err(MoveError::CellOccupied { row: r, col: c });
        }
        match mark {
            Mark::X => self.x.set(r, c)?,
            Mark::O => self.o.set(r, c)?,
        }
        log::trace!("placed {} at ({}, {})", mark, r, c);
        Ok(())
    }

    /// Whether the mark just placed at (row, col) completed a line.
    ///
    /// Only the lines through (row, col) are inspected: its row, its column,
    /// the main diagonal when `row == col` and the anti-diagonal when
    /// `row + col == 2`. The answer is only meaningful right after a
    /// successful `place_mark` at exactly these coordinates; see
    /// [`GameEngine::play`](super::game::GameEngine::play).
    pub fn has_three_in_a_row(&self, row: usize, col: usize, mark: Mark) -> bool {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return false;
        }
        let own = self.marks(mark);
        let line = |raw: u16| own.contains(BB::from_raw(raw));

        if line(ROW_LINES[row]) || line(COL_LINES[col]) {
            return true;
        }
        if row == col && line(MAIN_DIAGONAL) {
            return true;
        }
        row + col == BOARD_SIZE - 1 && line(ANTI_DIAGONAL)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board {{ x: {:?}, o: {:?} }}", self.x, self.o)
    }
}
