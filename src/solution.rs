//! Solution paths and their compressed step notation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::coord::Direction;
use crate::rules::{Move, Piece};

/// A maximal run of consecutive moves of one piece in one direction,
/// collapsed into a single entry carrying a distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub piece: Piece,
    pub direction: Direction,
    pub distance: u32,
}

impl Step {
    /// Solution Notation for one step, e.g. `4L2` or `XU3`: piece id,
    /// direction letter, distance. Wave ids are 1-based row numbers.
    pub fn notation(&self) -> String {
        format!("{}{}{}", self.piece, self.direction, self.distance)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.piece, self.direction, self.distance)
    }
}

/// An ordered move sequence from the start state to a solved state, plus its
/// step compression.
///
/// The compression is purely presentational: expanding the steps reproduces
/// the move list exactly, and the solution length is always measured in
/// individual moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    moves: Vec<Move>,
    steps: Vec<Step>,
}

impl Solution {
    /// The zero-length solution of an already-solved board.
    pub(crate) fn empty() -> Self {
        Self {
            moves: Vec::new(),
            steps: Vec::new(),
        }
    }

    pub fn from_moves(moves: Vec<Move>) -> Self {
        let steps = compress(&moves);
        Self { moves, steps }
    }

    /// Individual unit moves, in order.
    #[inline]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Compressed steps, in order.
    #[inline]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    #[inline]
    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Decompresses the step list back into unit moves.
    pub fn expand_steps(&self) -> Vec<Move> {
        self.steps
            .iter()
            .flat_map(|s| {
                std::iter::repeat(Move::new(s.piece, s.direction)).take(s.distance as usize)
            })
            .collect()
    }

    /// The full Solution Notation string, steps joined by `", "`.
    pub fn notation(&self) -> String {
        let parts: Vec<String> = self.steps.iter().map(Step::notation).collect();
        parts.join(", ")
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.notation())
    }
}

fn compress(moves: &[Move]) -> Vec<Step> {
    let mut steps: Vec<Step> = Vec::new();
    for mv in moves {
        match steps.last_mut() {
            Some(s) if s.piece == mv.piece && s.direction == mv.direction => s.distance += 1,
            _ => steps.push(Step {
                piece: mv.piece,
                direction: mv.direction,
                distance: 1,
            }),
        }
    }
    steps
}
