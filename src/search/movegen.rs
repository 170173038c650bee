//! Legal-successor generation in the fixed exploration order.

use crate::board::Board;
use crate::coord::HORIZONTAL;
use crate::rules::{boat_move, wave_move, Move, Piece};
use crate::search::resources::{ResourceTracker, SearchError};

/// All legal successors of `board`, paired with the move that produces each.
///
/// The order is fixed for reproducibility: waves top to bottom trying Left
/// then Right, then boats in ascending id order trying Up/Left before
/// Down/Right along their axis. BFS minimality does not depend on this
/// order, but which of several equally short solutions is found first does.
pub fn legal_successors(
    board: &Board,
    tracker: &mut ResourceTracker,
) -> Result<Vec<(Move, Board)>, SearchError> {
    let mut out: Vec<(Move, Board)> = Vec::new();

    for row in 0..board.height() {
        for direction in HORIZONTAL {
            if let Some(next) = wave_move(board, row, direction) {
                out.push((Move::new(Piece::Wave(row), direction), next));
            }
        }
    }

    for boat in board.boats() {
        for direction in boat.axis().directions() {
            if let Some(next) = boat_move(board, boat.id(), direction) {
                out.push((Move::new(Piece::Boat(boat.id()), direction), next));
            }
        }
    }

    tracker.bump_edges("movegen", out.len())?;
    Ok(out)
}
