//! Search statistics
//!
//! One accumulator per run. Controllers take it by `&mut` so iterative deepening can keep a single
//! running total across its passes while each pass owns its own frontier and registry.
//!
//! | Counter            | Incremented when                                         |
//! |--------------------|----------------------------------------------------------|
//! | `steps`            | a neighbor candidate is examined; best-first also counts each pop |
//! | `dead_ends`        | an expanded node produced no unseen neighbor             |
//! | `generated_states` | see each controller (all candidates vs. novel ones)      |
//! | `peak_memory`      | frontier + visited size exceeds the previous maximum     |

use serde::Serialize;

/// Counters for one search run; all monotonic non-decreasing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    pub steps: u64,
    pub dead_ends: u64,
    pub generated_states: u64,
    pub peak_memory: usize,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn record_step(&mut self) {
        self.steps += 1;
    }

    #[inline]
    pub(crate) fn record_generated(&mut self) {
        self.generated_states += 1;
    }

    #[inline]
    pub(crate) fn record_dead_end(&mut self) {
        self.dead_ends += 1;
    }

    /// Memory proxy: live frontier entries plus registered states
    #[inline]
    pub(crate) fn observe_memory(&mut self, frontier: usize, visited: usize) {
        self.peak_memory = self.peak_memory.max(frontier + visited);
    }
}
