//! Best-first search
//!
//! Expands the frontier node with the lowest `g + 1 + h * 2` until a zero-conflict state is popped or
//! the frontier runs dry. Every neighbor is registered as visited the moment it is pushed, so a state
//! enters the frontier at most once per run.
//!
//! The weighting is not admissible A*: it trades optimal path length for fewer expansions.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use serde::Serialize;
use tracing::{info, trace};

use crate::constants::HEURISTIC_WEIGHT;
use crate::evaluation::heuristic;
use crate::move_gen::neighbors;
use crate::stats::SearchStats;
use crate::types::*;
use crate::visited::VisitedRegistry;

/// Frontier entry: a state with its path cost and heuristic
#[derive(Debug, Clone)]
struct SearchNode {
    priority: u32,
    serial: u64,
    g: u32,
    h: u32,
    state: State,
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.serial == other.serial
    }
}

impl Eq for SearchNode {}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Reversed so `BinaryHeap` pops the lowest priority; equal priorities pop in insertion order
impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.serial.cmp(&self.serial))
    }
}

/// Frontier priority of a child reached with path cost `g + 1`
#[inline]
pub fn priority(parent_g: u32, h: u32) -> u32 {
    parent_g + 1 + h * HEURISTIC_WEIGHT
}

/// Final result of a best-first run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BestFirstReport {
    pub outcome: SearchOutcome,
    pub stats: SearchStats,
    /// Moves from the start to the solution, when solved
    pub solution_cost: Option<u32>,
    /// Expanded states that yielded no unseen neighbor
    pub dead_end_states: Vec<State>,
}

/// Best-first search over one start state, driven one expansion at a time
#[derive(Debug)]
pub struct BestFirstSearch {
    frontier: BinaryHeap<SearchNode>,
    visited: VisitedRegistry,
    stats: SearchStats,
    dead_end_states: Vec<State>,
    serial: u64,
    finished: Option<(SearchOutcome, Option<u32>)>,
}

impl BestFirstSearch {
    /// Frontier holds the start at priority `h(start)`; the registry holds its key
    pub fn new(start: State) -> Self {
        let h = heuristic(&start);
        let mut frontier = BinaryHeap::new();
        frontier.push(SearchNode {
            priority: h,
            serial: 0,
            g: 0,
            h,
            state: start,
        });

        Self {
            frontier,
            visited: VisitedRegistry::seeded(start),
            stats: SearchStats::new(),
            dead_end_states: Vec::new(),
            serial: 0,
            finished: None,
        }
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    pub fn visited_len(&self) -> usize {
        self.visited.len()
    }

    /// Pop and expand one node
    ///
    /// Returns `None` while the search is still running, and the terminal outcome once it has
    /// finished. Calling again after termination returns the same outcome without doing work.
    pub fn step(&mut self) -> Option<SearchOutcome> {
        if let Some((outcome, _)) = self.finished {
            return Some(outcome);
        }

        let Some(node) = self.frontier.pop() else {
            info!(
                "[BFS] Frontier exhausted | Steps={} | Visited={}",
                self.stats.steps,
                self.visited.len()
            );
            self.finished = Some((SearchOutcome::Exhausted, None));
            return Some(SearchOutcome::Exhausted);
        };

        self.stats.record_step();
        self.stats
            .observe_memory(self.frontier.len(), self.visited.len());

        if node.h == 0 {
            info!(
                "[BFS] Solution {} at cost {} | Steps={}",
                node.state, node.g, self.stats.steps
            );
            let outcome = SearchOutcome::Solved(node.state);
            self.finished = Some((outcome, Some(node.g)));
            return Some(outcome);
        }

        let mut dead_end = true;
        for neighbor in neighbors(&node.state) {
            self.stats.record_step();
            self.stats.record_generated();

            if self.visited.insert(neighbor) {
                let h = heuristic(&neighbor);
                self.serial += 1;
                self.frontier.push(SearchNode {
                    priority: priority(node.g, h),
                    serial: self.serial,
                    g: node.g + 1,
                    h,
                    state: neighbor,
                });
                dead_end = false;
            }
        }

        if dead_end {
            trace!("[BFS] Dead end at {}", node.state);
            self.stats.record_dead_end();
            self.dead_end_states.push(node.state);
        }

        None
    }

    /// Step until a terminal outcome is reached
    pub fn run(mut self) -> BestFirstReport {
        let outcome = loop {
            if let Some(outcome) = self.step() {
                break outcome;
            }
        };

        BestFirstReport {
            outcome,
            stats: self.stats,
            solution_cost: self.finished.and_then(|(_, cost)| cost),
            dead_end_states: self.dead_end_states,
        }
    }
}

/// Run best-first search from `start` to completion
pub fn best_first_search(start: State) -> BestFirstReport {
    BestFirstSearch::new(start).run()
}
