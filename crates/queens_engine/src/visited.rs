//! Visited registry
//!
//! Deduplicates states within one run (a best-first search, or one depth-limited pass). The state is
//! its own key: `State` derives `Hash + Eq` over its row array, so two entries collide exactly when
//! the placements are identical.

use rustc_hash::FxHashSet;

use super::types::State;

/// Set of states already produced during the current run
#[derive(Debug, Clone, Default)]
pub struct VisitedRegistry {
    seen: FxHashSet<State>,
}

impl VisitedRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry that already contains the start state
    pub fn seeded(start: State) -> Self {
        let mut registry = Self::new();
        registry.insert(start);
        registry
    }

    /// Record a state; returns `true` if it had not been seen before
    #[inline]
    pub fn insert(&mut self, state: State) -> bool {
        self.seen.insert(state)
    }

    #[inline]
    pub fn contains(&self, state: &State) -> bool {
        self.seen.contains(state)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
