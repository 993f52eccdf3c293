//! Game rules for standard Gomoku
//!
//! Five or more stones in a row wins; overlines count.

pub mod win;

// Re-exports for convenient access
pub use win::{check_winner, find_five_positions, has_five_in_row};
