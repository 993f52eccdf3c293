//! Search strategy selection

use std::fmt;
use std::str::FromStr;

use crate::config::ConfigError;

/// Which variant of the minimax recursion to run.
///
/// Both variants explore moves in the same order and pick the same move;
/// alpha-beta only skips subtrees that cannot change the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Exhaustive minimax to the depth limit
    Minimax,
    /// Minimax with alpha-beta cutoffs
    #[default]
    AlphaBeta,
}

impl Strategy {
    /// Whether alpha/beta bounds are checked for cutoffs
    #[inline]
    pub fn prunes(self) -> bool {
        matches!(self, Strategy::AlphaBeta)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Strategy::Minimax => "minimax",
            Strategy::AlphaBeta => "alphabeta",
        })
    }
}

impl FromStr for Strategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimax" => Ok(Strategy::Minimax),
            "alphabeta" | "alpha-beta" | "ab" => Ok(Strategy::AlphaBeta),
            _ => Err(ConfigError::UnknownStrategy(s.to_string())),
        }
    }
}
