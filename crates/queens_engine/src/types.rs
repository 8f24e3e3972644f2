//! # Queens Engine Core Types
//!
//! ## The `State` Structure
//!
//! A [`State`] is a complete placement of queens, one per column. It stores the row of every queen in a
//! fixed-size array indexed by column:
//!
//! ```text
//! rows = [0, 4, 7, 5, 2, 6, 1, 3]
//!         ^ column 0 has its queen on row 0
//!                  ^ column 3 has its queen on row 5
//! ```
//!
//! ### Why a Fixed Array of u8?
//!
//! - **Copy semantics**: a state is 8 bytes, so deriving a neighbor is a plain copy plus one write and
//!   the parent is never mutated
//! - **Structural identity**: `Eq` and `Hash` are derived, so the state is its own visited-set key and
//!   no separate string key is needed
//! - **Length invariant**: the array length is part of the type, so a state with the wrong number of
//!   columns cannot exist
//!
//! Row values are validated on entry (see [`State::new`] and [`State::from_rows`]); after that every
//! row is known to be in `0..BOARD_SIZE`.
//!
//! ## The `SearchOutcome` Enum
//!
//! Both controllers end in exactly one of two ways: a zero-conflict state was reached, or the search
//! space ran out. Neither is an error.

use serde::Serialize;

use super::constants::BOARD_SIZE;

/// Row index of a queen (0-7)
pub type Row = u8;
/// Column index on the board (0-7)
pub type Col = usize;
/// Raw row-per-column layout
pub type Board = [Row; BOARD_SIZE];

/// One queen per column; `rows[col]` is that queen's row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct State {
    pub(crate) rows: Board,
}

/// Terminal result of a search run or a depth-limited pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "state", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// A state with zero conflicts was dequeued
    Solved(State),
    /// The frontier emptied without reaching a goal
    Exhausted,
}

impl SearchOutcome {
    pub fn is_solved(&self) -> bool {
        matches!(self, SearchOutcome::Solved(_))
    }

    /// The goal state, if one was found
    pub fn solution(&self) -> Option<&State> {
        match self {
            SearchOutcome::Solved(state) => Some(state),
            SearchOutcome::Exhausted => None,
        }
    }
}
