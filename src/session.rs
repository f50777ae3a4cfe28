#![cfg(feature = "std")]

use anyhow::Context;

use crate::{
    core::{CoinFlip, GameEngine, GameStatus, Mark, MoveOutcome},
    player::{InputError, MoveSource},
    ui::{Notice, View},
};

/// Wins per mark across every game played in this process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    x_wins: u32,
    o_wins: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn x_wins(&self) -> u32 {
        self.x_wins
    }

    pub fn o_wins(&self) -> u32 {
        self.o_wins
    }

    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    /// Credit the winner of a finished game. Ties and unfinished games
    /// leave the score alone.
    pub fn record(&mut self, status: GameStatus) {
        match status.winner() {
            Some(Mark::X) => self.x_wins += 1,
            Some(Mark::O) => self.o_wins += 1,
            None => {}
        }
    }
}

/// Play one game from an empty board until a win or a tie.
///
/// Bad input and rejected moves re-prompt the same player. Only
/// [`InputError::Closed`] and [`InputError::Io`] abort the game.
pub fn play_game<I, V>(first: Mark, input: &mut I, view: &mut V) -> Result<GameStatus, InputError>
where
    I: MoveSource + ?Sized,
    V: View + ?Sized,
{
    let mut engine = GameEngine::new(first);
    while let Some(mark) = engine.current() {
        view.show_board(engine.board());
        view.notify(&Notice::Turn(mark));

        let (row, col) = match input.read_move() {
            Ok(mv) => mv,
            Err(InputError::Parse) => {
                view.notify(&Notice::InvalidInput);
                continue;
            }
            Err(e) => return Err(e),
        };

        match engine.play(row, col) {
            Ok(MoveOutcome::Continue { .. }) => {}
            Ok(MoveOutcome::Win(winner)) => {
                view.notify(&Notice::Winner(winner));
                view.show_board(engine.board());
            }
            Ok(MoveOutcome::Tie) => {
                view.notify(&Notice::Tie);
                view.show_board(engine.board());
            }
            Err(e) => {
                log::debug!("{} rejected at ({}, {}): {:?}", mark, row, col, e);
                view.notify(&Notice::Rejected(e));
            }
        }
    }
    Ok(engine.status())
}

/// Top-level loop: repeated games, the running score and the play-again prompt.
pub struct Session<I, V, C> {
    input: I,
    view: V,
    coin: C,
    score: Scoreboard,
}

impl<I: MoveSource, V: View, C: CoinFlip> Session<I, V, C> {
    pub fn new(input: I, view: V, coin: C) -> Self {
        Self {
            input,
            view,
            coin,
            score: Scoreboard::new(),
        }
    }

    pub fn score(&self) -> Scoreboard {
        self.score
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Play a single game with a freshly flipped starting mark and record
    /// its result.
    pub fn play_round(&mut self) -> Result<GameStatus, InputError> {
        let first = self.coin.flip();
        log::info!("new game, {} starts", first);
        self.view.notify(&Notice::StartingPlayer(first));

        let status = play_game(first, &mut self.input, &mut self.view)?;
        self.score.record(status);
        log::info!(
            "game over: {:?}, score X={} O={}",
            status,
            self.score.x_wins(),
            self.score.o_wins()
        );
        Ok(status)
    }

    /// Keep playing until the players decline another game or input ends.
    /// Returns the final score.
    pub fn run(&mut self) -> anyhow::Result<Scoreboard> {
        self.view.notify(&Notice::Welcome);
        loop {
            match self.play_round() {
                Ok(_) => {}
                Err(InputError::Closed) => {
                    self.input_closed();
                    break;
                }
                Err(e) => return Err(e).context("reading move"),
            }

            self.view.notify(&Notice::Score(self.score));
            self.view.notify(&Notice::PlayAgain);
            match self.input.read_answer() {
                Ok(true) => {}
                Ok(false) => break,
                Err(InputError::Closed) => {
                    self.input_closed();
                    break;
                }
                Err(e) => return Err(e).context("reading play-again answer"),
            }
        }
        self.view.notify(&Notice::Farewell);
        Ok(self.score)
    }

    fn input_closed(&mut self) {
        log::info!("input closed, leaving");
        self.view.notify(&Notice::InputClosed);
    }
}
