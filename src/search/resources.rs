//! Resource budgets and the tracking guard used by search routines.
//!
//! State graphs explode combinatorially, so searches run under explicit
//! counter budgets and surface allocation failures through `try_reserve`
//! wrappers instead of aborting the process. Budgets are approximate but
//! correlate strongly with memory use. Exceeding a budget is a distinct
//! abort ([`SearchError::LimitExceeded`]), never a silent `Unsolvable`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::Board;

/// Search budgets used to bound memory and time consumption.
///
/// - `max_states`: states admitted to the deduplication index
/// - `max_edges`: generated moves
/// - `max_runtime_steps`: generic loop-iteration guard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLimits {
    pub max_states: usize,
    pub max_edges: usize,
    pub max_runtime_steps: u64,
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self {
            max_states: 2_000_000,
            max_edges: 50_000_000,
            max_runtime_steps: 200_000_000,
        }
    }
}

/// Running counters tracked during a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceCounts {
    pub states: u64,
    pub edges: u64,
    pub runtime_steps: u64,
}

/// Structured errors returned by search routines.
///
/// Illegal moves and unsolvable boards are *not* errors; these variants
/// cover only externally imposed resource bounds.
#[derive(Debug, Clone, Error)]
pub enum SearchError {
    /// A configured resource limit was exceeded.
    #[error(
        "limit exceeded at {stage}: {metric} (limit={limit}, observed={observed}); \
         counts(states={}, edges={}, runtime_steps={})",
        counts.states,
        counts.edges,
        counts.runtime_steps
    )]
    LimitExceeded {
        stage: &'static str,
        metric: &'static str,
        limit: u64,
        observed: u64,
        counts: ResourceCounts,
    },
    /// A `try_reserve` allocation failed for a large structure.
    #[error("allocation failed at {stage} for {structure}")]
    AllocationFailed {
        stage: &'static str,
        structure: &'static str,
        counts: ResourceCounts,
    },
}

/// Tracks budgets and counters during one search call.
#[derive(Debug, Clone)]
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
    pub fn bump_states(&mut self, stage: &'static str, delta: usize) -> Result<(), SearchError> {
        self.bump(stage, "states", delta as u64, self.limits.max_states as u64, |c| {
            &mut c.states
        })
    }

    #[inline]
    pub fn bump_edges(&mut self, stage: &'static str, delta: usize) -> Result<(), SearchError> {
        self.bump(stage, "edges", delta as u64, self.limits.max_edges as u64, |c| {
            &mut c.edges
        })
    }

    #[inline]
    pub fn bump_steps(&mut self, stage: &'static str, delta: u64) -> Result<(), SearchError> {
        self.bump(stage, "runtime_steps", delta, self.limits.max_runtime_steps, |c| {
            &mut c.runtime_steps
        })
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

    pub fn try_reserve_boards(
        &self,
        stage: &'static str,
        v: &mut Vec<Board>,
        additional: usize,
    ) -> Result<(), SearchError> {
        v.try_reserve(additional)
            .map_err(|_| SearchError::AllocationFailed {
                stage,
                structure: "board_store",
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
