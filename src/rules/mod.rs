//! Move rules: what a single move is and how it transforms a board.
//!
//! Two move kinds exist. A **boat move** shifts one boat a single cell along
//! its axis and is locally decidable: it is rejected up front if any
//! destination cell is blocked. A **wave move** slides a whole cluster of
//! coupled waves one slot sideways; its legality is settled after the fact
//! by the candidate check in [`validate`], because boats spanning several
//! waves make a local predicate impractical.

pub mod boat;
pub mod validate;
pub mod wave;

pub use boat::boat_move;
pub use validate::is_legal_candidate;
pub use wave::{dependency_set, wave_move};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::BoatId;
use crate::coord::Direction;

/// The piece a move acts on. Waves are identified by row index; Solution
/// Notation prints them 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Piece {
    Wave(usize),
    Boat(BoatId),
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Piece::Wave(row) => write!(f, "{}", row + 1),
            Piece::Boat(id) => write!(f, "{id}"),
        }
    }
}

/// One unit move: a piece and a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub piece: Piece,
    pub direction: Direction,
}

impl Move {
    #[inline]
    pub fn new(piece: Piece, direction: Direction) -> Self {
        Self { piece, direction }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.piece, self.direction)
    }
}
