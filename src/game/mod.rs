//! Core Connect Four game logic: board with column-drop gravity, seats and
//! players, and the game session that sequences turns and detects wins and
//! ties.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, DEFAULT_HEIGHT, DEFAULT_WIDTH, LINE_LENGTH};
pub use player::{Player, Seat};
pub use state::{Game, GameStatus, IgnoreReason, MoveResult};
