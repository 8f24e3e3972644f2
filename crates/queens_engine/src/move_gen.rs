//! Neighbor generation
//!
//! A neighbor is the current state with exactly one queen moved to a different row of its column.
//! Every state therefore has `N * (N - 1)` neighbors.
//!
//! Candidates come out column-major, rows ascending, skipping each queen's current row. Which solution
//! a search reaches first among equal-priority candidates depends on this order, so it must not change.

use super::constants::*;
use super::types::*;

/// Lazy iterator over the neighbors of one state
#[derive(Debug, Clone)]
pub struct Neighbors {
    parent: State,
    cursor: usize,
}

/// All states one queen move away from `state`
pub fn neighbors(state: &State) -> Neighbors {
    Neighbors {
        parent: *state,
        cursor: 0,
    }
}

impl Neighbors {
    /// The state the candidates are derived from
    pub fn parent(&self) -> &State {
        &self.parent
    }

    fn remaining(&self) -> usize {
        let cells = BOARD_SIZE * BOARD_SIZE - self.cursor;
        let occupied = (self.cursor / BOARD_SIZE..BOARD_SIZE)
            .filter(|&col| col * BOARD_SIZE + self.parent.row(col) as usize >= self.cursor)
            .count();
        cells - occupied
    }
}

impl Iterator for Neighbors {
    type Item = State;

    fn next(&mut self) -> Option<State> {
        while self.cursor < BOARD_SIZE * BOARD_SIZE {
            let col = self.cursor / BOARD_SIZE;
            let row = (self.cursor % BOARD_SIZE) as Row;
            self.cursor += 1;

            if self.parent.row(col) != row {
                return Some(self.parent.with_queen_moved(col, row));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Neighbors {}

impl std::iter::FusedIterator for Neighbors {}
