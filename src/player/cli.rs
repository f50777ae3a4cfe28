use std::collections::VecDeque;
use std::io::{self, BufRead};
use std::string::String;
use std::vec::Vec;

use super::{InputError, MoveSource};

/// Whitespace-token reader over any line source.
///
/// Tokens carry over line boundaries, so `1` on one line and `2` on the
/// next is a valid move, and a third token on a move line is kept for the
/// next prompt. A malformed token drops everything still queued from its
/// line.
pub struct CliInput<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> CliInput<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> Result<String, InputError> {
        loop {
            if let Some(tok) = self.pending.pop_front() {
                return Ok(tok);
            }
            let mut raw = Vec::new();
            if self.reader.read_until(b'\n', &mut raw)? == 0 {
                return Err(InputError::Closed);
            }
            // Bytes that are not UTF-8 become U+FFFD and then fail to parse
            // like any other junk token.
            let line = String::from_utf8_lossy(&raw);
            self.pending.extend(line.split_whitespace().map(String::from));
        }
    }

    fn discard_line(&mut self) {
        if !self.pending.is_empty() {
            log::debug!("discarding {} queued token(s)", self.pending.len());
        }
        self.pending.clear();
    }

    fn next_coord(&mut self) -> Result<i64, InputError> {
        let tok = self.next_token()?;
        tok.parse::<i64>().map_err(|_| {
            log::debug!("rejected token {:?}", tok);
            self.discard_line();
            InputError::Parse
        })
    }
}

impl CliInput<io::StdinLock<'static>> {
    /// Reader over the process's standard input.
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> MoveSource for CliInput<R> {
    fn read_move(&mut self) -> Result<(i64, i64), InputError> {
        let row = self.next_coord()?;
        let col = self.next_coord()?;
        Ok((row, col))
    }

    fn read_answer(&mut self) -> Result<bool, InputError> {
        let tok = self.next_token()?;
        self.discard_line();
        Ok(matches!(tok.chars().next(), Some('y' | 'Y')))
    }
}
