//! Move input
//!
//! This module defines the [`MoveSource`] trait the session reads moves
//! from, and [`CliInput`], the implementation backed by a line reader.

#![cfg(feature = "std")]

use std::{fmt, io};

/// Errors raised while acquiring input.
#[derive(Debug)]
pub enum InputError {
    /// The input was not two integers. The rest of the offending line has
    /// already been discarded when this is returned.
    Parse,
    /// The input stream reached end-of-file.
    Closed,
    /// Reading the underlying stream failed.
    Io(io::Error),
}

impl From<io::Error> for InputError {
    fn from(err: io::Error) -> Self {
        InputError::Io(err)
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Parse => write!(f, "Invalid input. Enter two numbers."),
            InputError::Closed => write!(f, "input closed"),
            InputError::Io(e) => write!(f, "failed to read input: {}", e),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::Io(e) => Some(e),
            _ => None,
        }
    }
}

/// Interface implemented by anything that can supply player input.
pub trait MoveSource {
    /// Read the next move as `(row, col)`.
    ///
    /// The values are returned unvalidated; range checking belongs to the
    /// board.
    fn read_move(&mut self) -> Result<(i64, i64), InputError>;

    /// Read the answer to "play again?". `true` means play another game.
    fn read_answer(&mut self) -> Result<bool, InputError>;
}

pub mod cli;
pub use cli::CliInput;
