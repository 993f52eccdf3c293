//! Minimax search with optional alpha-beta pruning and iterative deepening
//!
//! This module implements the core search algorithm for the Gomoku AI.
//! Both strategies share one recursion; [`Strategy::Minimax`] simply never
//! takes a cutoff.
//!
//! # Features
//!
//! - Iterative deepening from depth 1 up to the depth limit
//! - Full `(-INF, INF)` window at the start of every iteration
//! - Row-major move order; the first move reaching the best score is kept
//! - Make/unmake on the caller's board, no board copies
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Stone};
//! use gomoku::search::{Searcher, Strategy};
//!
//! let mut searcher = Searcher::new(Strategy::AlphaBeta);
//! let mut board = Board::new(5);
//!
//! let result = searcher.search(&mut board, Stone::White, 2);
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: ({}, {})", best_move.row, best_move.col);
//! }
//! ```

use crate::board::{Board, Pos, Stone};
use crate::eval::evaluate;

use super::Strategy;

/// Infinity score for alpha-beta bounds
const INF: i32 = i32::MAX;

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Static evaluations at terminal and horizon nodes
    pub evaluations: u64,
    /// Nodes whose remaining siblings were skipped by a cutoff
    pub cutoffs: u64,
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Score of the best move, from the maximizing color's view
    pub score: i32,
    /// Depth of the iteration that produced `best_move`
    pub depth: u8,
    /// Total nodes visited across all iterations
    pub nodes: u64,
    /// Search diagnostics
    pub stats: SearchStats,
}

impl SearchResult {
    fn empty() -> Self {
        Self {
            best_move: None,
            score: 0,
            depth: 0,
            nodes: 0,
            stats: SearchStats::default(),
        }
    }
}

/// Depth-limited minimax searcher.
///
/// The searcher holds no position state between calls; counters are reset
/// at the start of every search.
#[derive(Debug, Clone)]
pub struct Searcher {
    strategy: Strategy,
    nodes: u64,
    stats: SearchStats,
}

impl Searcher {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            nodes: 0,
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Iterative deepening search for `color` up to `max_depth` plies.
    ///
    /// The move from the deepest iteration that produced one is returned.
    /// `board` is mutated during the search and restored before returning.
    pub fn search(&mut self, board: &mut Board, color: Stone, max_depth: u8) -> SearchResult {
        self.reset();
        let mut best_result = SearchResult::empty();

        for depth in 1..=max_depth {
            let (score, best_move) = self.minimax(board, color, depth, -INF, INF, true);
            log::debug!(
                "{} depth {}: move {:?} score {} nodes {}",
                self.strategy,
                depth,
                best_move,
                score,
                self.nodes
            );

            match best_move {
                Some(mov) => {
                    best_result.best_move = Some(mov);
                    best_result.score = score;
                    best_result.depth = depth;
                }
                None if best_result.best_move.is_none() => best_result.score = score,
                None => {}
            }
        }

        best_result.nodes = self.nodes;
        best_result.stats = self.stats.clone();
        best_result
    }

    /// Single fixed-depth search without iterative deepening.
    pub fn search_depth(&mut self, board: &mut Board, color: Stone, depth: u8) -> SearchResult {
        self.reset();
        let (score, best_move) = self.minimax(board, color, depth, -INF, INF, true);
        SearchResult {
            best_move,
            score,
            depth,
            nodes: self.nodes,
            stats: self.stats.clone(),
        }
    }

    fn reset(&mut self) {
        self.nodes = 0;
        self.stats = SearchStats::default();
    }

    /// Minimax recursion. `color` is the maximizing side throughout;
    /// `maximizing` says whose turn it is at this node.
    ///
    /// Returns the node score and, for non-terminal nodes, the move that
    /// achieved it. Every stone placed here is removed before returning.
    fn minimax(
        &mut self,
        board: &mut Board,
        color: Stone,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> (i32, Option<Pos>) {
        self.nodes += 1;
        let opponent = color.opponent();

        if depth == 0 || board.is_full() || board.check_winner(color) || board.check_winner(opponent)
        {
            self.stats.evaluations += 1;
            return (evaluate(board, color), None);
        }

        let to_move = if maximizing { color } else { opponent };
        let mut best_score = if maximizing { -INF } else { INF };
        let mut best_move = None;

        for mov in board.available_moves() {
            let (score, _) = board.with_stone(mov, to_move, |b| {
                self.minimax(b, color, depth - 1, alpha, beta, !maximizing)
            });

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = Some(mov);
                }
                alpha = alpha.max(score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = Some(mov);
                }
                beta = beta.min(score);
            }

            if self.strategy.prunes() && beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        (best_score, best_move)
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(Strategy::default())
    }
}
