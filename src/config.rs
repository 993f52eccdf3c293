//! Game configuration and validation
//!
//! The board and the engine trust their inputs; anything coming from a user
//! goes through [`GameConfig::validate`] first.

use thiserror::Error;

use crate::board::{Stone, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::engine::DEFAULT_DEPTH;
use crate::game::GameMode;
use crate::search::Strategy;

/// Default board side for the terminal game
pub const DEFAULT_BOARD_SIZE: usize = 7;

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board size {0} is out of range (expected {}..={})", MIN_BOARD_SIZE, MAX_BOARD_SIZE)]
    BoardSize(usize),
    #[error("depth limit must be at least 1")]
    ZeroDepth,
    #[error("unknown search strategy `{0}` (expected minimax or alphabeta)")]
    UnknownStrategy(String),
    #[error("unknown game mode `{0}` (expected pve, pvp or eve)")]
    UnknownMode(String),
    #[error("unknown color `{0}` (expected black or white)")]
    UnknownColor(String),
}

/// Everything needed to start a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub board_size: usize,
    pub depth_limit: u8,
    pub strategy: Strategy,
    pub mode: GameMode,
}

impl GameConfig {
    /// Check the ranges the core assumes.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::BoardSize(self.board_size));
        }
        if self.depth_limit == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        Ok(())
    }

    /// Validate and return self, for builder-style use
    pub fn validated(self) -> Result<Self, ConfigError> {
        self.validate().map(|()| self)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            depth_limit: DEFAULT_DEPTH,
            strategy: Strategy::default(),
            mode: GameMode::default(),
        }
    }
}

/// Parse a stone color name (`black`/`x` or `white`/`o`)
pub fn parse_color(s: &str) -> Result<Stone, ConfigError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "black" | "b" | "x" => Ok(Stone::Black),
        "white" | "w" | "o" => Ok(Stone::White),
        _ => Err(ConfigError::UnknownColor(s.to_string())),
    }
}
