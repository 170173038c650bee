//! Search over the implicit move graph.
//!
//! Nodes are board states, edges are single legal moves. [`breadth_first`]
//! finds a minimum-length move sequence to a solved state;
//! [`all_solutions`] keeps going and collects one shortest path to every
//! distinct solved state; [`depth_first_solvable`] answers reachability
//! only. Each owns its visited index for the duration of one call, so
//! independent searches never share state.

pub mod index;
pub mod movegen;
pub mod resources;

pub use index::{Slot, StateIndex};
pub use movegen::legal_successors;
pub use resources::{ResourceCounts, ResourceLimits, ResourceTracker, SearchError};

use std::collections::VecDeque;

use tracing::debug;

use crate::board::Board;
use crate::solution::Solution;

/// Result of a completed search.
///
/// `Unsolvable` is a legitimate puzzle outcome, not an error; resource
/// aborts surface as [`SearchError`] instead so they can never masquerade
/// as unsolvability.
#[derive(Debug, Clone)]
pub enum SolveOutcome {
    Solved(Solution),
    Unsolvable,
}

impl SolveOutcome {
    #[inline]
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            SolveOutcome::Solved(s) => Some(s),
            SolveOutcome::Unsolvable => None,
        }
    }

    #[inline]
    pub fn is_unsolvable(&self) -> bool {
        matches!(self, SolveOutcome::Unsolvable)
    }
}

/// Breadth-first shortest-path search from `start`.
///
/// States are explored in non-decreasing distance order, so the first solved
/// state generated closes a minimum-length move sequence. An exhausted
/// frontier means the puzzle is unsolvable.
pub fn breadth_first(start: &Board, limits: ResourceLimits) -> Result<SolveOutcome, SearchError> {
    if start.is_solved() {
        return Ok(SolveOutcome::Solved(Solution::empty()));
    }

    let mut tracker = ResourceTracker::new(limits);
    let mut index = StateIndex::new();
    let root = match index.offer(start.clone(), None, &mut tracker)? {
        Slot::Fresh(id) | Slot::Seen(id) => id,
    };

    let mut queue: VecDeque<(u32, u32)> = VecDeque::new();
    queue.push_back((root, 0));
    let mut reported_depth = 0u32;

    while let Some((id, depth)) = queue.pop_front() {
        tracker.bump_steps("bfs_expand", 1)?;

        if depth > reported_depth {
            debug!(
                depth,
                states = index.len(),
                queue = queue.len(),
                "breadth-first depth completed"
            );
            reported_depth = depth;
        }

        let board = index.board(id).clone();
        for (mv, next) in legal_successors(&board, &mut tracker)? {
            if let Slot::Fresh(next_id) = index.offer(next, Some((id, mv)), &mut tracker)? {
                if index.board(next_id).is_solved() {
                    debug!(
                        depth = depth + 1,
                        states = index.len(),
                        "solved state reached"
                    );
                    return Ok(SolveOutcome::Solved(Solution::from_moves(
                        index.path_to(next_id),
                    )));
                }
                queue.push_back((next_id, depth + 1));
            }
        }
    }

    debug!(states = index.len(), "frontier exhausted, no solved state");
    Ok(SolveOutcome::Unsolvable)
}

/// Breadth-first enumeration of every reachable solved state.
///
/// Explores the whole reachable state space and emits, for each distinct
/// solved configuration, the move sequence of one shortest path to it.
/// Solved states are terminal and never expanded, so every emitted path
/// ends with the move that docks the boat. Solutions come out in
/// non-decreasing length order; the first is a [`breadth_first`] answer,
/// and an empty vector means the puzzle is unsolvable.
pub fn all_solutions(
    start: &Board,
    limits: ResourceLimits,
) -> Result<Vec<Solution>, SearchError> {
    if start.is_solved() {
        return Ok(vec![Solution::empty()]);
    }

    let mut tracker = ResourceTracker::new(limits);
    let mut index = StateIndex::new();
    let root = match index.offer(start.clone(), None, &mut tracker)? {
        Slot::Fresh(id) | Slot::Seen(id) => id,
    };

    let mut solutions: Vec<Solution> = Vec::new();
    let mut queue: VecDeque<u32> = VecDeque::new();
    queue.push_back(root);

    while let Some(id) = queue.pop_front() {
        tracker.bump_steps("bfs_collect", 1)?;

        let board = index.board(id).clone();
        for (mv, next) in legal_successors(&board, &mut tracker)? {
            if let Slot::Fresh(next_id) = index.offer(next, Some((id, mv)), &mut tracker)? {
                if index.board(next_id).is_solved() {
                    solutions.push(Solution::from_moves(index.path_to(next_id)));
                } else {
                    queue.push_back(next_id);
                }
            }
        }
    }

    debug!(
        states = index.len(),
        solutions = solutions.len(),
        "state space exhausted"
    );
    Ok(solutions)
}

/// Depth-first reachability of a solved state from `start`.
///
/// Establishes solvability only; the path it would take is in general not
/// shortest. Uses an explicit stack and the same deduplication index to
/// bound revisits, since the move graph contains cycles (every move has an
/// inverse).
pub fn depth_first_solvable(
    start: &Board,
    limits: ResourceLimits,
) -> Result<bool, SearchError> {
    if start.is_solved() {
        return Ok(true);
    }

    let mut tracker = ResourceTracker::new(limits);
    let mut index = StateIndex::new();
    let root = match index.offer(start.clone(), None, &mut tracker)? {
        Slot::Fresh(id) | Slot::Seen(id) => id,
    };

    let mut stack: Vec<u32> = vec![root];
    while let Some(id) = stack.pop() {
        tracker.bump_steps("dfs_expand", 1)?;

        let board = index.board(id).clone();
        for (mv, next) in legal_successors(&board, &mut tracker)? {
            if let Slot::Fresh(next_id) = index.offer(next, Some((id, mv)), &mut tracker)? {
                if index.board(next_id).is_solved() {
                    return Ok(true);
                }
                stack.push(next_id);
            }
        }
    }

    Ok(false)
}
