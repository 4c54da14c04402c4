//! Resource tracking and allocation guards for search routines.
//!
//! The configuration graph grows exponentially with the number of vehicles. To keep a search
//! bounded, solvers use:
//! - counter-based budgets ([`crate::scenario::ResourceLimits`])
//! - `try_reserve` wrappers to surface allocation failures as [`crate::scenario::SearchError`]
//!
//! Exceeding a budget is reported as [`SearchError::LimitExceeded`]; the engines convert it
//! into a `BudgetExceeded` outcome.

use std::collections::BinaryHeap;

use crate::scenario::{ResourceCounts, ResourceLimits, SearchError};

#[derive(Debug, Clone)]
/// Tracks budgets/counters during a search.
pub struct ResourceTracker {
    limits: ResourceLimits,
    counts: ResourceCounts,
}

impl ResourceTracker {
    #[inline]
    pub fn new(limits: ResourceLimits) -> Self {
        Self {
            limits,
            counts: ResourceCounts::default(),
        }
    }

    #[inline]
    pub fn counts(&self) -> ResourceCounts {
        self.counts
    }

    #[inline]
    pub fn bump_expansions(&mut self, stage: &'static str) -> Result<(), SearchError> {
        self.bump(
            stage,
            "expansions",
            1,
            self.limits.max_expansions,
            |c| &mut c.expansions,
        )
    }

    #[inline]
    pub fn bump_states(&mut self, stage: &'static str, delta: usize) -> Result<(), SearchError> {
        self.bump(
            stage,
            "states",
            delta as u64,
            self.limits.max_states,
            |c| &mut c.states,
        )
    }

    #[inline]
    pub fn bump_edges(&mut self, stage: &'static str, delta: usize) -> Result<(), SearchError> {
        self.bump(
            stage,
            "edges",
            delta as u64,
            self.limits.max_edges,
            |c| &mut c.edges,
        )
    }

    fn bump(
        &mut self,
        stage: &'static str,
        metric: &'static str,
        delta: u64,
        limit: u64,
        field: impl FnOnce(&mut ResourceCounts) -> &mut u64,
    ) -> Result<(), SearchError> {
        let observed = {
            let v = field(&mut self.counts);
            *v = v.saturating_add(delta);
            *v
        };

        if observed > limit {
            return Err(SearchError::LimitExceeded {
                stage,
                metric,
                limit,
                observed,
                counts: self.counts,
            });
        }

        Ok(())
    }

    pub fn try_reserve_heap<T: Ord>(
        &self,
        stage: &'static str,
        structure: &'static str,
        heap: &mut BinaryHeap<T>,
        additional: usize,
    ) -> Result<(), SearchError> {
        heap.try_reserve(additional)
            .map_err(|_| SearchError::AllocationFailed {
                stage,
                structure,
                counts: self.counts,
            })
    }

    pub fn try_reserve_map<K, V>(
        &self,
        stage: &'static str,
        structure: &'static str,
        map: &mut rustc_hash::FxHashMap<K, V>,
        additional: usize,
    ) -> Result<(), SearchError>
    where
        K: std::hash::Hash + Eq,
    {
        map.try_reserve(additional)
            .map_err(|_| SearchError::AllocationFailed {
                stage,
                structure,
                counts: self.counts,
            })
    }
}
