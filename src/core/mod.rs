//! Core tic-tac-toe engine (no_std compatible)
//!
//! Board representation, move validation, win detection and the per-game
//! state machine. Nothing in here touches the terminal.

pub mod bitboard;
pub mod board;
pub mod coin;
pub mod common;
pub mod config;
pub mod game;

// Re-export commonly used types
pub use bitboard::{BitBoard, BitBoardError};
pub use board::Board;
pub use coin::{CoinFlip, RandomCoin, ScriptedCoin};
pub use common::{Cell, Mark, MoveError};
pub use config::*;
pub use game::{GameEngine, GameStatus, MoveOutcome};
