//! Win condition checking
//!
//! A player wins with `WIN_LENGTH` or more stones in a row along one of the
//! four line directions. Runs are found by walking forward from each stone;
//! the first stone of a run (in row-major order) always reaches the whole run.

use crate::board::{Board, Pos, Stone, DIRECTIONS, WIN_LENGTH};

/// Check if there's 5+ in a row for the given color
pub fn has_five_in_row(board: &Board, stone: Stone) -> bool {
    let Some(stones) = board.stones(stone) else {
        return false;
    };
    let size = board.size();

    for idx in stones.iter_ones() {
        let pos = Pos::from_index(idx, size);
        for &(dr, dc) in &DIRECTIONS {
            if run_length(board, pos, dr, dc, stone) >= WIN_LENGTH {
                return true;
            }
        }
    }
    false
}

/// Count consecutive `stone`s starting at `pos` and walking in `(dr, dc)`.
///
/// Stops counting once `WIN_LENGTH` is reached.
#[inline]
fn run_length(board: &Board, pos: Pos, dr: i32, dc: i32, stone: Stone) -> usize {
    let mut count = 0;
    let mut r = i32::from(pos.row);
    let mut c = i32::from(pos.col);
    while count < WIN_LENGTH && board.get_at(r, c) == Some(stone) {
        count += 1;
        r += dr;
        c += dc;
    }
    count
}

/// Find the positions of a 5-in-a-row if exists
///
/// Returns the full run (overlines included) from its first stone.
pub fn find_five_positions(board: &Board, stone: Stone) -> Option<Vec<Pos>> {
    let stones = board.stones(stone)?;
    let size = board.size();

    for idx in stones.iter_ones() {
        let pos = Pos::from_index(idx, size);
        for &(dr, dc) in &DIRECTIONS {
            if run_length(board, pos, dr, dc, stone) < WIN_LENGTH {
                continue;
            }
            let mut line = Vec::with_capacity(WIN_LENGTH);
            let mut r = i32::from(pos.row);
            let mut c = i32::from(pos.col);
            while board.get_at(r, c) == Some(stone) {
                line.push(Pos::new(r as u16, c as u16));
                r += dr;
                c += dc;
            }
            return Some(line);
        }
    }
    None
}

/// Winner of the position, if any.
///
/// Black is reported first when both colors have a five, which only happens
/// on boards set up by hand.
pub fn check_winner(board: &Board) -> Option<Stone> {
    [Stone::Black, Stone::White]
        .into_iter()
        .find(|&stone| has_five_in_row(board, stone))
}
