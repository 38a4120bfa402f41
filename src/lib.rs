//! # Drop Four
//!
//! A two-player Connect Four game: pieces drop into columns and the first
//! player to line up four (horizontally, vertically or diagonally) wins; a
//! full board without a line is a tie. Ships with a terminal UI built with
//! Ratatui and a headless replay tool.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, seats and players, game session
//! - [`moves`]: Parsing and applying scripted move lists
//! - [`ui`]: Terminal UI: interactive game view
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod moves;
pub mod ui;
