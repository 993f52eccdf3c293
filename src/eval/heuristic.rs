//! Heuristic evaluation function for Gomoku board positions
//!
//! This module provides the static evaluation used at search-horizon nodes.
//! It evaluates board positions based on:
//! - Win/loss detection
//! - Window scoring (fours, threes, twos, singles)
//! - Positional bonuses (center control)

use crate::board::{Board, Pos, Stone, DIRECTIONS, WIN_LENGTH};

use super::patterns::{window_score, PatternScore};

/// Evaluate the board from the perspective of the given color.
///
/// Returns a score where:
/// - Positive values indicate advantage for `color`
/// - Negative values indicate disadvantage for `color`
/// - `PatternScore::FIVE` indicates `color` has already won
/// - `-PatternScore::FIVE` indicates the opponent has already won
///
/// The window table is deliberately not antisymmetric, so
/// `evaluate(board, Black)` is generally not `-evaluate(board, White)`.
///
/// # Arguments
/// * `board` - The current board state
/// * `color` - The maximizing color
#[must_use]
pub fn evaluate(board: &Board, color: Stone) -> i32 {
    let opponent = color.opponent();

    if board.check_winner(color) {
        return PatternScore::FIVE;
    }
    if board.check_winner(opponent) {
        return -PatternScore::FIVE;
    }

    let window_total = evaluate_windows(board, color);

    // Position score (center control bonus)
    let position_score = evaluate_positions(board, color) - evaluate_positions(board, opponent);

    window_total + position_score
}

/// Sum of window scores over every in-bounds window in all four directions.
fn evaluate_windows(board: &Board, color: Stone) -> i32 {
    let size = board.size() as i32;
    let span = WIN_LENGTH as i32 - 1;
    let opponent = color.opponent();
    let mut score = 0;

    for row in 0..size {
        for col in 0..size {
            for &(dr, dc) in &DIRECTIONS {
                if !board.in_bounds(row + dr * span, col + dc * span) {
                    continue;
                }
                let mut mine = 0;
                let mut theirs = 0;
                for i in 0..=span {
                    match board.get_at(row + dr * i, col + dc * i) {
                        Some(s) if s == color => mine += 1,
                        Some(s) if s == opponent => theirs += 1,
                        _ => {}
                    }
                }
                score += window_score(mine, theirs);
            }
        }
    }

    score
}

/// Center-control bonus for all stones of one color.
///
/// Each stone earns `max(0, CENTER_BONUS - manhattan distance to center)`.
fn evaluate_positions(board: &Board, color: Stone) -> i32 {
    let center = board.center();
    board
        .positions(color)
        .map(|pos: Pos| (PatternScore::CENTER_BONUS - pos.manhattan(center)).max(0))
        .sum()
}
