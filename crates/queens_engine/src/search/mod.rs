//! Search controllers
//!
//! This module implements the two interchangeable strategies:
//! - Best-first search ordered by `g + 1 + 2h` (informed, unbounded memory)
//! - Iterative deepening over depth-limited passes (uninformed, memory bounded per pass)
//!
//! Both controllers are synchronous state machines with explicit frontiers (a binary heap or a stack),
//! so there is no recursion and no suspension point inside the search loop.
//!
//! ## Module Organization
//!
//! - `best_first` - Priority frontier controller
//! - `depth_limited` - One bounded depth-first pass
//! - `iterative` - Iterative deepening wrapper around `depth_limited`

mod best_first;
mod depth_limited;
mod iterative;

pub use best_first::{best_first_search, priority, BestFirstReport, BestFirstSearch};
pub use depth_limited::DepthLimitedPass;
pub use iterative::{iterative_deepening, IterativeDeepeningReport, PassSummary};
