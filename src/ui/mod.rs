//! User interface for the Gomoku game
//!
//! Only a terminal front end is provided.

pub mod terminal;

pub use terminal::{announce_result, prompt_move, prompt_parse, run_game, TerminalError};
