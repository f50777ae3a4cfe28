#![cfg_attr(not(feature = "std"), no_std)]

//! Two-player console tic-tac-toe.
//!
//! [`core`] holds the `no_std` game rules; with the `std` feature the crate
//! also provides the console input, rendering and the play-again session.

#[cfg(feature = "std")]
extern crate std;

pub mod core;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod player;
#[cfg(feature = "std")]
pub mod session;
#[cfg(feature = "std")]
pub mod ui;

pub use crate::core::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from_env};
#[cfg(feature = "std")]
pub use player::{CliInput, InputError, MoveSource};
#[cfg(feature = "std")]
pub use session::{play_game, Scoreboard, Session};
#[cfg(feature = "std")]
pub use ui::{notice_text, render_board, Notice, RenderStyle, TerminalView, View};
