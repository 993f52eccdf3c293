//! Evaluation module for Gomoku positions
//!
//! Scores a board from the perspective of the maximizing color:
//! - Terminal wins and losses
//! - Line windows of `WIN_LENGTH` cells (twos, threes, fours)
//! - Positional bonuses (center control)

pub mod heuristic;
pub mod patterns;

pub use heuristic::evaluate;
pub use patterns::{evaluate_line, PatternScore};
