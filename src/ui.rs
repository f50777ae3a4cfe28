#![cfg(feature = "std")]

//! Console output: board rendering and game messages.

use std::fmt::Write as _;
use std::io::{self, Write};
use std::string::String;

use crate::core::{Board, Cell, Mark, MoveError, BOARD_SIZE};
use crate::session::Scoreboard;

const RED: &str = "\x1b[31m";
const BLUE: &str = "\x1b[34m";
const RESET: &str = "\x1b[0m";

/// How marks are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStyle {
    /// X in red, O in blue.
    #[default]
    Color,
    /// No escape sequences.
    Plain,
}

/// Something the session wants to tell the players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Welcome,
    StartingPlayer(Mark),
    /// Prompt the given mark for a move.
    Turn(Mark),
    /// A parsed move was refused by the board.
    Rejected(MoveError),
    /// The move could not be parsed.
    InvalidInput,
    Winner(Mark),
    Tie,
    Score(Scoreboard),
    PlayAgain,
    /// Input ended while a prompt was open.
    InputClosed,
    Farewell,
}

/// Display sink the session reports to. Rendering cannot fail from the
/// session's point of view.
pub trait View {
    fn show_board(&mut self, board: &Board);
    fn notify(&mut self, notice: &Notice);
}

/// Render `board` as a labelled 3×3 grid.
///
/// ```text
///    0 1 2
///   -------
/// 0| X . .
/// 1| . O .
/// 2| . . .
/// ```
pub fn render_board(board: &Board, style: RenderStyle) -> String {
    let mut out = String::new();
    out.push_str("   ");
    for c in 0..BOARD_SIZE {
        let _ = write!(out, "{}", c);
        if c + 1 < BOARD_SIZE {
            out.push(' ');
        }
    }
    out.push('\n');
    out.push_str("  -------\n");
    for r in 0..BOARD_SIZE {
        let _ = write!(out, "{}| ", r);
        for c in 0..BOARD_SIZE {
            let mark = board.cell(r, c).ok().and_then(Cell::mark);
            match (mark, style) {
                (None, _) => out.push('.'),
                (Some(m), RenderStyle::Plain) => out.push(m.symbol()),
                (Some(m), RenderStyle::Color) => {
                    let color = match m {
                        Mark::X => RED,
                        Mark::O => BLUE,
                    };
                    let _ = write!(out, "{}{}{}", color, m.symbol(), RESET);
                }
            }
            out.push(' ');
        }
        out.push('\n');
    }
    out.push('\n');
    out
}

/// Text printed for a notice.
pub fn notice_text(notice: &Notice) -> String {
    match notice {
        Notice::Welcome => "Welcome to Tic-Tac-Toe!\n".into(),
        Notice::StartingPlayer(m) => format!("\nStarting player: {}\n", m),
        Notice::Turn(m) => format!("Current player: {}\nEnter row and column (0-2 0-2): ", m),
        Notice::Rejected(e) => format!("{}\n", e),
        Notice::InvalidInput => "Invalid input. Enter two numbers.\n".into(),
        Notice::Winner(m) => format!("\nPlayer {} ({}) wins!\n\n", m.player_number(), m),
        Notice::Tie => "It's a tie!\n".into(),
        Notice::Score(s) => format!("Score: X={} | O={}\n", s.x_wins(), s.o_wins()),
        Notice::PlayAgain => "Play again? (y/n): ".into(),
        Notice::InputClosed => "\n".into(),
        Notice::Farewell => "Thanks for playing.\n".into(),
    }
}

/// [`View`] writing to a terminal or any other byte sink.
pub struct TerminalView<W> {
    out: W,
    style: RenderStyle,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W, style: RenderStyle) -> Self {
        Self { out, style }
    }

    /// Reference to the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    fn emit(&mut self, text: &str) {
        let res = self
            .out
            .write_all(text.as_bytes())
            .and_then(|()| self.out.flush());
        if let Err(e) = res {
            log::warn!("failed to write to console: {}", e);
        }
    }
}

impl TerminalView<io::Stdout> {
    pub fn stdout(style: RenderStyle) -> Self {
        Self::new(io::stdout(), style)
    }
}

impl<W: Write> View for TerminalView<W> {
    fn show_board(&mut self, board: &Board) {
        let text = render_board(board, self.style);
        self.emit(&text);
    }

    fn notify(&mut self, notice: &Notice) {
        let text = notice_text(notice);
        self.emit(&text);
    }
}
