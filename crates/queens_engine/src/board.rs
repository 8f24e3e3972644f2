//! Board utilities and state construction
//!
//! Provides the operations every other module builds on:
//! - Checked and unchecked state construction
//! - Copy-on-write single queen moves
//! - The canonical `0,1,2,...` text form
//! - Random start states

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use super::constants::*;
use super::error::{QueensError, QueensResult};
use super::types::*;

impl State {
    /// Build a state from a row-per-column array
    ///
    /// # Panics
    ///
    /// Panics if any row is outside the board. Use [`State::from_rows`] for untrusted input.
    pub fn new(rows: Board) -> Self {
        for (column, &row) in rows.iter().enumerate() {
            assert!(
                (row as usize) < BOARD_SIZE,
                "row {row} in column {column} is off the board"
            );
        }
        Self { rows }
    }

    /// Build a state from a slice, validating length and row range
    pub fn from_rows(rows: &[usize]) -> QueensResult<Self> {
        if rows.len() != BOARD_SIZE {
            return Err(QueensError::InvalidLength {
                expected: BOARD_SIZE,
                found: rows.len(),
            });
        }

        let mut board: Board = [0; BOARD_SIZE];
        for (column, &row) in rows.iter().enumerate() {
            if row >= BOARD_SIZE {
                return Err(QueensError::RowOutOfRange {
                    column,
                    row,
                    max: BOARD_SIZE - 1,
                });
            }
            board[column] = row as Row;
        }

        Ok(Self { rows: board })
    }

    /// Row of the queen in `col`
    #[inline]
    pub fn row(&self, col: Col) -> Row {
        self.rows[col]
    }

    #[inline]
    pub fn rows(&self) -> &Board {
        &self.rows
    }

    /// Copy of this state with the queen in `col` moved to `row`
    #[inline]
    pub fn with_queen_moved(&self, col: Col, row: Row) -> State {
        debug_assert!((row as usize) < BOARD_SIZE);
        let mut rows = self.rows;
        rows[col] = row;
        State { rows }
    }

    /// Iterate over `(col, row)` queen positions
    pub fn queens(&self) -> impl Iterator<Item = (Col, Row)> + '_ {
        self.rows.iter().copied().enumerate()
    }
}

/// Canonical key form: comma-joined rows, e.g. `0,4,7,5,2,6,1,3`
impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (col, row) in self.queens() {
            if col > 0 {
                f.write_str(",")?;
            }
            write!(f, "{row}")?;
        }
        Ok(())
    }
}

/// Parses the key form; whitespace around each row is ignored
impl FromStr for State {
    type Err = QueensError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .split(',')
            .map(|token| {
                let token = token.trim();
                token.parse::<usize>().map_err(|_| QueensError::InvalidToken {
                    token: token.to_string(),
                })
            })
            .collect::<QueensResult<Vec<usize>>>()?;

        State::from_rows(&rows)
    }
}

/// Random start state: every row drawn independently and uniformly
///
/// The result is not guaranteed to differ from a goal state.
pub fn seed_initial_state<R: Rng + ?Sized>(rng: &mut R) -> State {
    let mut rows: Board = [0; BOARD_SIZE];
    for row in rows.iter_mut() {
        *row = rng.random_range(0..BOARD_SIZE as Row);
    }
    State { rows }
}

/// Check whether two queens attack each other (same row or diagonal)
#[inline]
pub fn queens_attack(a: (Col, Row), b: (Col, Row)) -> bool {
    let (col_a, row_a) = (a.0 as i32, a.1 as i32);
    let (col_b, row_b) = (b.0 as i32, b.1 as i32);
    row_a == row_b || (col_a - col_b).abs() == (row_a - row_b).abs()
}
