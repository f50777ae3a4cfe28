use super::{
    board::Board,
    common::{Mark, MoveError},
    config::CELL_COUNT,
};

/// Where a single game currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Waiting for the given mark to move.
    AwaitingMove(Mark),
    /// The given mark completed a line.
    WinDetected(Mark),
    /// All cells filled without a line.
    TieDetected,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::AwaitingMove(_))
    }

    /// The winning mark, if the game ended in a win.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameStatus::WinDetected(m) => Some(*m),
            _ => None,
        }
    }
}

/// Result of a validated move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Play continues with `next` to move.
    Continue { next: Mark },
    /// The mover completed a line.
    Win(Mark),
    /// The ninth mark was placed without a line.
    Tie,
}

/// State of one game: the board, whose turn it is and how many cells are filled.
///
/// Placement and the last-move win check always run together inside
/// [`play`](Self::play), so a win can never be missed by checking late or
/// at the wrong cell.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    status: GameStatus,
    filled: usize,
}

impl GameEngine {
    /// Create an engine with an empty board and `first` to move.
    pub fn new(first: Mark) -> Self {
        Self {
            board: Board::new(),
            status: GameStatus::AwaitingMove(first),
            filled: 0,
        }
    }

    /// Immutable reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Mark whose turn it is, or `None` once the game is over.
    pub fn current(&self) -> Option<Mark> {
        match self.status {
            GameStatus::AwaitingMove(m) => Some(m),
            _ => None,
        }
    }

    /// Number of successful placements so far.
    pub fn filled(&self) -> usize {
        self.filled
    }

    /// Place the current mark at (row, col) and advance the game.
    ///
    /// A rejected move leaves the board, the filled count and the turn
    /// unchanged.
    pub fn play(&mut self, row: i64, col: i64) -> Result<MoveOutcome, MoveError> {
        let mark = self.current().ok_or(MoveError::GameOver)?;
        self.board.place_mark(row, col, mark)?;
        self.filled += 1;

        // place_mark succeeded, so both coordinates are within [0, 2].
        let (r, c) = (row as usize, col as usize);
        let outcome = if self.board.has_three_in_a_row(r, c, mark) {
            self.status = GameStatus::WinDetected(mark);
            log::debug!("{} completed a line at ({}, {})", mark, r, c);
            MoveOutcome::Win(mark)
        } else if self.filled == CELL_COUNT {
            self.status = GameStatus::TieDetected;
            log::debug!("board full without a line");
            MoveOutcome::Tie
        } else {
            let next = mark.opponent();
            self.status = GameStatus::AwaitingMove(next);
            MoveOutcome::Continue { next }
        };
        Ok(outcome)
    }
}
