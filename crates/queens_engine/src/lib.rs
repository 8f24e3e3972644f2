//! Eight queens search engine
//!
//! Repairs a random placement of eight queens (one per column) into a non-attacking one by moving
//! a single queen at a time. Two interchangeable controllers drive the search:
//!
//! - [`search::best_first_search`] - informed, frontier ordered by `g + 1 + 2h`
//! - [`search::iterative_deepening`] - uninformed, depth-limited passes of increasing depth
//!
//! ```
//! use queens_engine::{solve, SearchConfig, State, Strategy};
//!
//! let start: State = "0,0,0,0,0,0,0,0".parse().unwrap();
//! let report = solve(Strategy::BestFirst, start, &SearchConfig::default());
//! assert!(report.outcome().is_solved());
//! ```
//!
//! ## Module Organization
//!
//! - `types` / `board` - the `State` value type and its constructors
//! - `evaluation` - conflict heuristic and goal test
//! - `move_gen` - neighbor generation
//! - `visited` - per-run deduplication
//! - `stats` - statistics accumulator
//! - `search` - the two controllers
//! - `api` - strategy dispatch

pub mod api;
pub mod board;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod move_gen;
pub mod search;
pub mod stats;
pub mod types;
pub mod visited;

pub use api::{solve, SearchConfig, SearchReport, Strategy};
pub use board::seed_initial_state;
pub use error::{QueensError, QueensResult};
pub use evaluation::{heuristic, is_goal};
pub use move_gen::neighbors;
pub use stats::SearchStats;
pub use types::{SearchOutcome, State};
