//! Common types for tic-tac-toe: marks, cells and move errors.

use core::fmt;

use super::bitboard::BitBoardError;

/// One of the two player symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The mark that moves after this one.
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Character used when rendering the mark.
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    /// Player number used in the winner announcement: X is player 1, O is player 2.
    pub fn player_number(self) -> u8 {
        match self {
            Mark::X => 1,
            Mark::O => 2,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// State of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Marked(Mark),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(m) => Some(m),
        }
    }
}

/// Errors returned when a move is rejected.
///
/// Coordinates are kept signed so that negative user input is reported
/// as-is instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Row or column lies outside `[0, 2]`.
    OutOfRange { row: i64, col: i64 },
    /// Target cell already holds a mark.
    CellOccupied { row: usize, col: usize },
    /// The game already ended in a win or a tie.
    GameOver,
}

impl From<BitBoardError> for MoveError {
    fn from(err: BitBoardError) -> Self {
        match err {
            BitBoardError::IndexOutOfBounds { row, col } => MoveError::OutOfRange {
                row: row as i64,
                col: col as i64,
            },
        }
    }
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfRange { .. } => write!(f, "Invalid coordinates. Try again."),
            MoveError::CellOccupied { .. } => write!(f, "Cell already occupied."),
            MoveError::GameOver => write!(f, "The game is already over."),
        }
    }
}
