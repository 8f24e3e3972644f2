//! Iterative deepening search
//!
//! Runs depth-limited passes with limits `0, 1, 2, ...` up to the configured maximum. Every pass restarts
//! from the same start state with a fresh stack and registry, so memory is bounded by the largest single
//! pass rather than by every state ever seen. Statistics accumulate across all passes.

use serde::Serialize;
use tracing::{debug, info};

use super::depth_limited::DepthLimitedPass;
use crate::stats::SearchStats;
use crate::types::*;

/// What one depth-limited pass did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PassSummary {
    pub depth_limit: u32,
    pub solved: bool,
    /// Registry size when the pass ended
    pub visited_states: usize,
}

/// Final result of an iterative deepening run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IterativeDeepeningReport {
    pub outcome: SearchOutcome,
    pub stats: SearchStats,
    /// Depth limit of the pass that found the solution
    pub solution_depth: Option<u32>,
    /// One entry per pass, in order of increasing limit
    pub passes: Vec<PassSummary>,
}

/// Run depth-limited passes for every limit in `0..=max_depth`
///
/// Stops at the first pass that pops a goal. If every pass exhausts, the outcome is
/// [`SearchOutcome::Exhausted`].
pub fn iterative_deepening(start: State, max_depth: u32) -> IterativeDeepeningReport {
    let mut stats = SearchStats::new();
    let mut passes = Vec::with_capacity(max_depth as usize + 1);

    for depth_limit in 0..=max_depth {
        let mut pass = DepthLimitedPass::new(start, depth_limit);
        let outcome = pass.run(&mut stats);

        passes.push(PassSummary {
            depth_limit,
            solved: outcome.is_solved(),
            visited_states: pass.visited_len(),
        });

        if let SearchOutcome::Solved(solution) = outcome {
            info!(
                "[IDS] Solution {} on depth {} | Steps={} | Generated={}",
                solution, depth_limit, stats.steps, stats.generated_states
            );
            return IterativeDeepeningReport {
                outcome,
                stats,
                solution_depth: Some(depth_limit),
                passes,
            };
        }

        debug!(
            "[IDS] Solution not found on depth {} | Visited={}",
            depth_limit,
            pass.visited_len()
        );
    }

    info!(
        "[IDS] Exhausted every depth up to {} | Steps={}",
        max_depth, stats.steps
    );
    IterativeDeepeningReport {
        outcome: SearchOutcome::Exhausted,
        stats,
        solution_depth: None,
        passes,
    }
}
