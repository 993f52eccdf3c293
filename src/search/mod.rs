//! Search module for Gomoku AI
//!
//! Contains:
//! - Search strategy selection (plain minimax or alpha-beta)
//! - The shared minimax recursion with iterative deepening

pub mod alphabeta;
pub mod strategy;

pub use alphabeta::{SearchResult, SearchStats, Searcher};
pub use strategy::Strategy;
