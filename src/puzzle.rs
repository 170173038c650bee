//! The user-facing puzzle façade.

use crate::board::{Board, MalformedBoardError};
use crate::coord::Coord;
use crate::search::{
    all_solutions, breadth_first, depth_first_solvable, ResourceLimits, SearchError,
    SolveOutcome,
};
use crate::solution::Solution;

/// A puzzle: an initial board plus the search budgets to solve it under.
///
/// The board is an immutable value; solving never mutates it, and every call
/// owns its visited state, so one `Puzzle` can be solved repeatedly (or from
/// several threads) with identical results.
#[derive(Debug, Clone)]
pub struct Puzzle {
    board: Board,
    limits: ResourceLimits,
}

impl Puzzle {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            limits: ResourceLimits::default(),
        }
    }

    pub fn with_limits(board: Board, limits: ResourceLimits) -> Self {
        Self { board, limits }
    }

    /// Parses the initial board from its textual form.
    pub fn from_text(text: &str, port: Coord) -> Result<Self, MalformedBoardError> {
        Ok(Self::new(Board::from_text(text, port)?))
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn limits(&self) -> ResourceLimits {
        self.limits
    }

    /// Finds a minimum-length move sequence to a solved state, or reports
    /// the puzzle unsolvable. An already-solved board yields a zero-length
    /// solution immediately.
    pub fn solve(&self) -> Result<SolveOutcome, SearchError> {
        breadth_first(&self.board, self.limits)
    }

    /// Enumerates one shortest solution per distinct reachable solved state,
    /// in non-decreasing length order. Explores the whole reachable state
    /// space, so it costs as much as an unsolvable [`solve`](Self::solve);
    /// an empty vector means unsolvable.
    pub fn all_solutions(&self) -> Result<Vec<Solution>, SearchError> {
        all_solutions(&self.board, self.limits)
    }

    /// Whether any solved state is reachable. Cheaper than [`solve`](Self::solve)
    /// when only a yes/no answer is needed; the two can never disagree on
    /// the same board and limits generous enough for both to finish.
    pub fn is_solvable(&self) -> Result<bool, SearchError> {
        depth_first_solvable(&self.board, self.limits)
    }
}
