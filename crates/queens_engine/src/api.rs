//! Public API for the queens engine
//!
//! Provides a single entry point that dispatches to either search strategy and returns a unified
//! report.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::constants::DEFAULT_MAX_DEPTH;
use super::search::*;
use super::stats::SearchStats;
use super::types::*;

/// Which controller to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    BestFirst,
    IterativeDeepening,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::BestFirst, Strategy::IterativeDeepening];

    /// Human-readable name
    pub fn description(&self) -> &'static str {
        match self {
            Strategy::BestFirst => "Best-first search",
            Strategy::IterativeDeepening => "Iterative deepening search",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Tunable search parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Deepest pass attempted by iterative deepening (ignored by best-first)
    pub max_depth: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Result of either controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "strategy", rename_all = "kebab-case")]
pub enum SearchReport {
    BestFirst(BestFirstReport),
    IterativeDeepening(IterativeDeepeningReport),
}

impl SearchReport {
    pub fn strategy(&self) -> Strategy {
        match self {
            SearchReport::BestFirst(_) => Strategy::BestFirst,
            SearchReport::IterativeDeepening(_) => Strategy::IterativeDeepening,
        }
    }

    pub fn outcome(&self) -> &SearchOutcome {
        match self {
            SearchReport::BestFirst(report) => &report.outcome,
            SearchReport::IterativeDeepening(report) => &report.outcome,
        }
    }

    pub fn stats(&self) -> &SearchStats {
        match self {
            SearchReport::BestFirst(report) => &report.stats,
            SearchReport::IterativeDeepening(report) => &report.stats,
        }
    }
}

/// Run `strategy` from `start` until it solves or exhausts
///
/// "No solution" is an ordinary [`SearchOutcome::Exhausted`] result, never an error.
pub fn solve(strategy: Strategy, start: State, config: &SearchConfig) -> SearchReport {
    match strategy {
        Strategy::BestFirst => SearchReport::BestFirst(best_first_search(start)),
        Strategy::IterativeDeepening => {
            SearchReport::IterativeDeepening(iterative_deepening(start, config.max_depth))
        }
    }
}
