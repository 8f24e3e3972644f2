//! Conflict heuristic
//!
//! Scores a state by how many queens sit on a crowded line:
//! - Row conflicts
//! - Rising diagonal conflicts (`col + row`)
//! - Falling diagonal conflicts (`col - row + N - 1`)
//!
//! Each queen contributes `count - 1` for every line it shares, so three queens on one row add 6 rather
//! than the 3 attacking pairs. The score is a distance proxy, not an exact pair count; it is zero
//! exactly when no two queens attack each other.

use super::constants::*;
use super::types::*;

/// Number of conflicts on the board, computed in O(N)
pub fn heuristic(state: &State) -> u32 {
    let mut row_count = [0u32; BOARD_SIZE];
    let mut rising = [0u32; DIAGONAL_COUNT];
    let mut falling = [0u32; DIAGONAL_COUNT];

    for (col, row) in state.queens() {
        let row = row as usize;
        row_count[row] += 1;
        rising[col + row] += 1;
        falling[col + BOARD_SIZE - 1 - row] += 1;
    }

    state
        .queens()
        .map(|(col, row)| {
            let row = row as usize;
            excess(row_count[row])
                + excess(rising[col + row])
                + excess(falling[col + BOARD_SIZE - 1 - row])
        })
        .sum()
}

/// Goal test: no queen attacks another
#[inline]
pub fn is_goal(state: &State) -> bool {
    heuristic(state) == 0
}

#[inline]
fn excess(count: u32) -> u32 {
    count.saturating_sub(1)
}
