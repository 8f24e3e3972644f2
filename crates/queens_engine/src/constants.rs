//! # Queens Engine Constants - Board Geometry & Search Parameters
//!
//! ## Overview
//!
//! The engine works on a fixed 8×8 board with one queen per column. Everything that depends on the
//! board size is derived from [`BOARD_SIZE`] here, so the remaining modules never hard-code an 8.
//!
//! ## Diagonal Indexing
//!
//! Two queens share a diagonal when either `col + row` or `col - row` is equal. Both quantities are
//! mapped onto `0..DIAGONAL_COUNT`:
//! - **Sum diagonals**: `col + row`, ranging over `0..=2N-2`
//! - **Difference diagonals**: `col - row + N - 1`, ranging over `0..=2N-2`
//!
//! ## Evaluation Weight
//!
//! Best-first search orders its frontier by `g + 1 + h * HEURISTIC_WEIGHT`. The weight of 2 favours
//! conflict reduction over path length, so the search behaves like weighted A*: fast, but without an
//! optimality guarantee.

/// Number of columns (and rows) on the board
pub const BOARD_SIZE: usize = 8;

/// Number of distinct diagonals in one direction
pub const DIAGONAL_COUNT: usize = 2 * BOARD_SIZE - 1;

/// Number of single-queen moves available from any state
pub const NEIGHBOR_COUNT: usize = BOARD_SIZE * (BOARD_SIZE - 1);

/// Multiplier applied to the heuristic in the best-first priority
pub const HEURISTIC_WEIGHT: u32 = 2;

/// Default deepest pass attempted by iterative deepening
pub const DEFAULT_MAX_DEPTH: u32 = BOARD_SIZE as u32;
