//! Terminal UI: an interactive Connect Four board driven by the keyboard.

mod app;
pub mod board_widget;
mod game_view;

pub use app::App;
