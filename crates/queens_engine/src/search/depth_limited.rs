//! Depth-limited depth-first pass
//!
//! One pass explores from the start with an explicit LIFO stack, never expanding nodes at the depth
//! limit. Each pass owns a fresh stack and a fresh visited registry; only the statistics accumulator is
//! shared with the caller.
//!
//! The goal test runs on every popped node before the depth check, so a solution sitting exactly at the
//! limit is still reported. Nodes at the limit are skipped rather than expanded, and are therefore never
//! counted as dead ends. Only neighbor candidates of expanded nodes count as steps; a pop on its own
//! does not.

use tracing::trace;

use crate::evaluation::is_goal;
use crate::move_gen::neighbors;
use crate::stats::SearchStats;
use crate::types::*;
use crate::visited::VisitedRegistry;

/// A single bounded depth-first exploration
#[derive(Debug)]
pub struct DepthLimitedPass {
    limit: u32,
    stack: Vec<(State, u32)>,
    visited: VisitedRegistry,
}

impl DepthLimitedPass {
    /// Stack seeded with `(start, 0)`; registry holds only the start
    pub fn new(start: State, limit: u32) -> Self {
        Self {
            limit,
            stack: vec![(start, 0)],
            visited: VisitedRegistry::seeded(start),
        }
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn stack_len(&self) -> usize {
        self.stack.len()
    }

    pub fn visited_len(&self) -> usize {
        self.visited.len()
    }

    /// Pop and process one node
    ///
    /// Returns `None` while work remains, `Solved` when a goal is popped, `Exhausted` once the stack is
    /// empty.
    pub fn step(&mut self, stats: &mut SearchStats) -> Option<SearchOutcome> {
        stats.observe_memory(self.stack.len(), self.visited.len());

        let Some((state, depth)) = self.stack.pop() else {
            return Some(SearchOutcome::Exhausted);
        };

        if is_goal(&state) {
            return Some(SearchOutcome::Solved(state));
        }

        if depth < self.limit {
            let mut dead_end = true;
            for neighbor in neighbors(&state) {
                stats.record_step();
                if self.visited.insert(neighbor) {
                    self.stack.push((neighbor, depth + 1));
                    stats.record_generated();
                    dead_end = false;
                }
            }

            if dead_end {
                trace!("[IDS] Dead end at {} (depth {})", state, depth);
                stats.record_dead_end();
            }
        }

        None
    }

    /// Step until the pass solves or exhausts
    pub fn run(&mut self, stats: &mut SearchStats) -> SearchOutcome {
        loop {
            if let Some(outcome) = self.step(stats) {
                return outcome;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::NEIGHBOR_COUNT;

    #[test]
    fn test_new_pass_holds_only_start() {
        let pass = DepthLimitedPass::new(State::new([0; 8]), 5);

        assert_eq!(pass.limit(), 5);
        assert_eq!(pass.stack_len(), 1);
        assert_eq!(pass.visited_len(), 1);
    }

    #[test]
    fn test_limit_zero_only_checks_start() {
        let mut stats = SearchStats::new();
        let mut pass = DepthLimitedPass::new(State::new([0; 8]), 0);

        assert_eq!(pass.run(&mut stats), SearchOutcome::Exhausted);
        assert_eq!(stats.steps, 0, "No candidate was examined");
        assert_eq!(stats.generated_states, 0);
        assert_eq!(stats.dead_ends, 0, "Skipped expansion is not a dead end");
        assert_eq!(stats.peak_memory, 2, "Start on the stack plus its key");
    }

    #[test]
    fn test_limit_one_expands_start_only() {
        let mut stats = SearchStats::new();
        let mut pass = DepthLimitedPass::new(State::new([0; 8]), 1);

        assert_eq!(pass.run(&mut stats), SearchOutcome::Exhausted);
        assert_eq!(stats.generated_states, NEIGHBOR_COUNT as u64);
        assert_eq!(stats.steps, NEIGHBOR_COUNT as u64, "One step per candidate of the start");
        assert_eq!(pass.visited_len(), NEIGHBOR_COUNT + 1);
        assert_eq!(stats.dead_ends, 0);
    }

    #[test]
    fn test_goal_at_limit_is_reported() {
        // One move away from a solution: column 7 moved off its row
        let goal = State::new([0, 4, 7, 5, 2, 6, 1, 3]);
        let start = goal.with_queen_moved(7, 0);

        let mut stats = SearchStats::new();
        let outcome = DepthLimitedPass::new(start, 1).run(&mut stats);

        assert_eq!(outcome, SearchOutcome::Solved(goal));
    }

    #[test]
    fn test_goal_start_needs_no_expansion() {
        let goal = State::new([0, 4, 7, 5, 2, 6, 1, 3]);
        let mut stats = SearchStats::new();

        let outcome = DepthLimitedPass::new(goal, 8).run(&mut stats);

        assert_eq!(outcome, SearchOutcome::Solved(goal));
        assert_eq!(stats.steps, 0);
        assert_eq!(stats.generated_states, 0);
    }

    #[test]
    fn test_stats_accumulate_across_passes() {
        let start = State::new([0; 8]);
        let mut stats = SearchStats::new();

        DepthLimitedPass::new(start, 1).run(&mut stats);
        let after_first = stats;
        DepthLimitedPass::new(start, 1).run(&mut stats);

        assert_eq!(stats.generated_states, after_first.generated_states * 2);
        assert_eq!(stats.steps, after_first.steps * 2);
        assert_eq!(stats.peak_memory, after_first.peak_memory, "Peak is a maximum, not a sum");
    }

    #[test]
    fn test_dead_ends_counted_once_registry_fills() {
        // Late in a deep pass, expanded nodes find every neighbor already registered
        let start = State::new([0; 8]);
        let mut stats = SearchStats::new();

        DepthLimitedPass::new(start, 3).run(&mut stats);

        assert_eq!(stats.dead_ends, 49, "Depth 3 from all zeros hits dead ends");
        assert_eq!(stats.steps % NEIGHBOR_COUNT as u64, 0, "Steps come in whole expansions");
    }
}
