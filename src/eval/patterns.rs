//! Pattern scores for Gomoku evaluation
//!
//! A window is `WIN_LENGTH` consecutive cells along one direction. Windows
//! holding stones of both colors are dead and score nothing. Opponent
//! windows are weighted more heavily than our own so the search prefers
//! blocking a threat over extending a line of equal length.

use crate::board::Stone;

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// Five in a row - terminal win
    pub const FIVE: i32 = 100_000;

    /// Own window with four stones and one empty
    pub const FOUR: i32 = 1_000;
    /// Own window with three stones and two empties
    pub const THREE: i32 = 100;
    /// Own window with two stones
    pub const TWO: i32 = 10;

    /// Opponent window with four stones (one move from five)
    pub const OPP_FOUR: i32 = -5_000;
    /// Opponent window with three stones
    pub const OPP_THREE: i32 = -2_000;
    /// Opponent window with two stones
    pub const OPP_TWO: i32 = -10;

    /// Largest center bonus, earned by a stone on the center cell
    pub const CENTER_BONUS: i32 = 5;
}

/// Score one window of cells for `color`.
///
/// `cells` is normally `WIN_LENGTH` long; counts decide the score, so the
/// order of cells inside the window does not matter.
pub fn evaluate_line(cells: &[Stone], color: Stone) -> i32 {
    let opponent = color.opponent();
    let mine = cells.iter().filter(|&&s| s == color).count();
    let theirs = cells.iter().filter(|&&s| s == opponent).count();
    window_score(mine, theirs)
}

/// Score a window from its stone counts.
#[inline]
pub(crate) fn window_score(mine: usize, theirs: usize) -> i32 {
    match (mine, theirs) {
        (0, 0) => 0,
        (m, 0) => match m {
            4 => PatternScore::FOUR,
            3 => PatternScore::THREE,
            2 => PatternScore::TWO,
            m => m as i32,
        },
        (0, t) => match t {
            4 => PatternScore::OPP_FOUR,
            3 => PatternScore::OPP_THREE,
            2 => PatternScore::OPP_TWO,
            t => -(t as i32),
        },
        // Both colors present: blocked
        _ => 0,
    }
}
