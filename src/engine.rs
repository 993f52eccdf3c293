//! Main AI engine wrapping the searcher
//!
//! The engine owns a [`Searcher`], a depth limit and the color it plays.
//! Each call to [`AIEngine::select_move`] runs iterative deepening from
//! depth 1 to the limit on the caller's board and hands back the move; the
//! caller applies it.
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, Stone, Strategy};
//!
//! let mut engine = AIEngine::new(Strategy::AlphaBeta, 2);
//! let mut board = Board::new(5);
//! board.make_move(2, 2, Stone::Black);
//!
//! let result = engine.get_move_with_stats(&mut board);
//! println!("Best move: {:?}", result.best_move);
//! println!("Depth: {}", result.depth);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use crate::board::{Board, Pos, Stone};
use crate::search::{SearchResult, Searcher, Strategy};

/// Default depth limit when none is configured
pub const DEFAULT_DEPTH: u8 = 2;

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Minimax score of the best move for the engine's color
    pub score: i32,
    /// Deepest completed iteration that produced the move
    pub depth: u8,
    /// Strategy that ran the search
    pub strategy: Strategy,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
    /// Static evaluations performed
    pub evaluations: u64,
    /// Alpha-beta cutoffs taken
    pub cutoffs: u64,
}

impl MoveResult {
    #[inline]
    fn from_search(result: SearchResult, strategy: Strategy, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            depth: result.depth,
            strategy,
            time_ms,
            nodes: result.nodes,
            evaluations: result.stats.evaluations,
            cutoffs: result.stats.cutoffs,
        }
    }
}

/// Main AI Engine for Gomoku.
///
/// Plays one fixed color; that color is the maximizing side of every search.
#[derive(Debug, Clone)]
pub struct AIEngine {
    searcher: Searcher,
    max_depth: u8,
    color: Stone,
}

impl AIEngine {
    /// Create an engine playing White, the side that moves second.
    ///
    /// A depth limit of 0 is raised to 1.
    #[must_use]
    pub fn new(strategy: Strategy, depth_limit: u8) -> Self {
        Self::for_color(strategy, depth_limit, Stone::White)
    }

    /// Create an engine playing `color`.
    #[must_use]
    pub fn for_color(strategy: Strategy, depth_limit: u8, color: Stone) -> Self {
        debug_assert!(color != Stone::Empty);
        Self {
            searcher: Searcher::new(strategy),
            max_depth: depth_limit.max(1),
            color,
        }
    }

    /// Choose a move for the engine's color.
    ///
    /// Returns `None` when the board is already decided: no empty cell is
    /// left, or either side already has five in a row. The board is left
    /// exactly as it was passed in.
    ///
    /// # Example
    ///
    /// ```
    /// use gomoku::{AIEngine, Board, Stone, Strategy};
    ///
    /// let mut engine = AIEngine::for_color(Strategy::Minimax, 1, Stone::Black);
    /// let mut board = Board::new(5);
    ///
    /// let pos = engine.select_move(&mut board).unwrap();
    /// assert!(board.make_move(pos.row.into(), pos.col.into(), Stone::Black));
    /// ```
    #[must_use]
    pub fn select_move(&mut self, board: &mut Board) -> Option<Pos> {
        self.get_move_with_stats(board).best_move
    }

    /// Choose a move and report search statistics.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &mut Board) -> MoveResult {
        let start = Instant::now();
        let result = self.searcher.search(board, self.color, self.max_depth);
        let time_ms = start.elapsed().as_millis() as u64;

        let result = MoveResult::from_search(result, self.searcher.strategy(), time_ms);
        log::info!(
            "{:?} ({}) chose {:?}: score {} depth {} nodes {} cutoffs {} in {}ms",
            self.color,
            result.strategy,
            result.best_move,
            result.score,
            result.depth,
            result.nodes,
            result.cutoffs,
            result.time_ms
        );
        result
    }

    #[inline]
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    pub fn set_max_depth(&mut self, depth: u8) {
        self.max_depth = depth.max(1);
    }

    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.searcher.strategy()
    }

    /// Color this engine plays (the maximizing side)
    #[inline]
    pub fn color(&self) -> Stone {
        self.color
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new(Strategy::default(), DEFAULT_DEPTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::PatternScore;

    #[test]
    fn test_engine_creation() {
        let engine = AIEngine::new(Strategy::Minimax, 3);
        assert_eq!(engine.max_depth(), 3);
        assert_eq!(engine.strategy(), Strategy::Minimax);
        assert_eq!(engine.color(), Stone::White);
    }

    #[test]
    fn test_engine_default() {
        let engine = AIEngine::default();
        assert_eq!(engine.max_depth(), DEFAULT_DEPTH);
        assert_eq!(engine.strategy(), Strategy::AlphaBeta);
    }

    #[test]
    fn test_zero_depth_is_raised() {
        let mut engine = AIEngine::new(Strategy::AlphaBeta, 0);
        assert_eq!(engine.max_depth(), 1);
        engine.set_max_depth(0);
        assert_eq!(engine.max_depth(), 1);
        engine.set_max_depth(4);
        assert_eq!(engine.max_depth(), 4);
    }

    #[test]
    fn test_engine_empty_board() {
        let mut board = Board::new(5);
        let mut engine = AIEngine::new(Strategy::AlphaBeta, 1);
        let mov = engine.select_move(&mut board);
        assert!(mov.is_some());
        assert!(board.is_board_empty());
    }

    #[test]
    fn test_engine_full_board() {
        let mut board = Board::new(5);
        for (i, pos) in board.available_moves().into_iter().enumerate() {
            // Rows alternate parity so no line of five forms
            let row_shift = (pos.row / 2) as usize;
            let stone = if (i + row_shift) % 2 == 0 { Stone::Black } else { Stone::White };
            board.place_stone(pos, stone);
        }
        let mut engine = AIEngine::new(Strategy::Minimax, 2);
        assert_eq!(engine.select_move(&mut board), None);
    }

    #[test]
    fn test_engine_decided_board_returns_none() {
        let mut board = Board::new(6);
        for c in 0..5 {
            assert!(board.make_move(0, c, Stone::Black));
        }
        for c in 0..4 {
            assert!(board.make_move(5, c, Stone::White));
        }
        let before = board.clone();

        let mut white = AIEngine::new(Strategy::AlphaBeta, 2);
        let result = white.get_move_with_stats(&mut board);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, -PatternScore::FIVE);

        let mut black = AIEngine::for_color(Strategy::Minimax, 2, Stone::Black);
        let result = black.get_move_with_stats(&mut board);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, PatternScore::FIVE);
        assert_eq!(board, before);
    }

    #[test]
    fn test_engine_on_board_larger_than_goban() {
        let mut board = Board::new(20);
        assert!(board.make_move(19, 19, Stone::Black));

        let mut engine = AIEngine::new(Strategy::AlphaBeta, 1);
        let pos = engine.select_move(&mut board);
        assert_eq!(pos, Some(Pos::new(10, 10)));
        assert_eq!(board.stone_count(), 1);
    }

    #[test]
    fn test_engine_finds_immediate_win() {
        let mut board = Board::new(6);
        for i in 1..5 {
            board.make_move(3, i, Stone::Black);
        }
        board.make_move(0, 0, Stone::White);
        board.make_move(5, 5, Stone::White);
        board.make_move(0, 5, Stone::White);

        let mut engine = AIEngine::for_color(Strategy::AlphaBeta, 2, Stone::Black);
        let result = engine.get_move_with_stats(&mut board);

        // Both (3, 0) and (3, 5) win; row-major order picks (3, 0)
        assert_eq!(result.best_move, Some(Pos::new(3, 0)));
        assert_eq!(result.score, crate::eval::PatternScore::FIVE);
    }

    #[test]
    fn test_engine_blocks_opponent_win() {
        let mut board = Board::new(6);
        // Black has 4 in a column, open only at the bottom
        board.make_move(0, 2, Stone::White);
        for r in 1..5 {
            board.make_move(r, 2, Stone::Black);
        }
        board.make_move(4, 4, Stone::White);
        board.make_move(1, 5, Stone::White);

        for strategy in [Strategy::Minimax, Strategy::AlphaBeta] {
            let mut engine = AIEngine::new(strategy, 2);
            assert_eq!(engine.select_move(&mut board), Some(Pos::new(5, 2)));
        }
    }

    #[test]
    fn test_move_result_fields() {
        let mut board = Board::new(5);
        let mut engine = AIEngine::new(Strategy::Minimax, 2);
        let result = engine.get_move_with_stats(&mut board);

        assert_eq!(result.strategy, Strategy::Minimax);
        assert_eq!(result.depth, 2);
        assert_eq!(result.cutoffs, 0);
        // depth 1 pass (26) + depth 2 pass (626)
        assert_eq!(result.nodes, 26 + 626);
        assert_eq!(result.evaluations, 25 + 600);
    }

    #[test]
    fn test_engine_multiple_searches() {
        let mut engine = AIEngine::new(Strategy::AlphaBeta, 2);
        let mut board = Board::new(5);
        board.make_move(2, 2, Stone::Black);

        let result1 = engine.select_move(&mut board);
        let result2 = engine.select_move(&mut board);
        assert_eq!(result1, result2);
    }

    #[test]
    fn test_engine_alternating_colors() {
        let mut black = AIEngine::for_color(Strategy::AlphaBeta, 2, Stone::Black);
        let mut white = AIEngine::for_color(Strategy::AlphaBeta, 2, Stone::White);
        let mut board = Board::new(5);

        for _ in 0..3 {
            let m = black.select_move(&mut board).unwrap();
            assert!(board.make_move(m.row.into(), m.col.into(), Stone::Black));
            let m = white.select_move(&mut board).unwrap();
            assert!(board.make_move(m.row.into(), m.col.into(), Stone::White));
        }
        assert_eq!(board.stone_count(), 6);
    }
}
