#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod common;
mod config;
#[cfg(feature = "std")]
pub mod console;
mod game;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod placement;
mod player;
mod player_ai;
#[cfg(feature = "std")]
mod player_cli;
pub mod score;
#[cfg(feature = "std")]
pub mod session;
mod ship;
pub mod ui;

pub use common::*;
pub use config::*;
#[cfg(feature = "std")]
pub use console::Console;
pub use game::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, parse_level, LOG_ENV};
pub use placement::*;
pub use player::*;
pub use player_ai::*;
#[cfg(feature = "std")]
pub use player_cli::*;
pub use score::{MemoryScoreStore, ScoreError, ScoreRecord, ScoreStore};
#[cfg(feature = "std")]
pub use score::FileScoreStore;
pub use ship::*;
