//! Gomoku search engine
//!
//! A small Gomoku (five-in-a-row) engine for square boards of any size from
//! 5x5 to 19x19:
//! - Five or more in a row wins (overlines allowed)
//! - Black moves first
//! - The automated side picks moves with depth-limited minimax, with or
//!   without alpha-beta pruning
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Win detection
//! - [`eval`]: Static position evaluation
//! - [`search`]: Minimax / alpha-beta search with iterative deepening
//! - [`engine`]: AI engine wrapping the searcher
//! - [`game`]: Turn order, game modes and outcome detection
//! - [`config`]: Validated game configuration
//! - [`ui`]: Terminal front end
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{AIEngine, Board, Stone, Strategy};
//!
//! let mut board = Board::new(7);
//! let mut engine = AIEngine::new(Strategy::AlphaBeta, 2);
//!
//! board.make_move(3, 3, Stone::Black);
//!
//! // AI responds as White
//! if let Some(pos) = engine.select_move(&mut board) {
//!     board.make_move(pos.row.into(), pos.col.into(), Stone::White);
//!     println!("AI plays at ({}, {})", pos.row, pos.col);
//! }
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, WIN_LENGTH};
pub use config::{ConfigError, GameConfig};
pub use engine::{AIEngine, MoveResult};
pub use game::{GameMode, GameResult, GameState};
pub use search::Strategy;
