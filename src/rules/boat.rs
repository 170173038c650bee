//! Boat moves: one boat, one cell, along its own axis.

use crate::board::{Board, BoatId, Cell};
use crate::coord::Direction;

/// Attempts to move `id` one cell in `direction`.
///
/// Single-row boats move horizontally along their row; boats spanning
/// several waves move vertically. The move is rejected before any state is
/// built if a destination cell is outside the board, a block, or another
/// boat's cell; this case is locally decidable and needs no candidate
/// check. Returns `None` for a rejected move.
pub fn boat_move(board: &Board, id: BoatId, direction: Direction) -> Option<Board> {
    let boat = board.boat(id)?;
    if !boat.axis().directions().contains(&direction) {
        return None;
    }

    let moved = boat.shifted(direction);
    for &c in moved.cells() {
        match board.cell(c)? {
            Cell::Water => {}
            Cell::Segment { boat: occupant, .. } if occupant == id => {}
            _ => return None,
        }
    }

    let boats: Vec<_> = board
        .boats()
        .iter()
        .map(|b| if b.id() == id { moved.clone() } else { b.clone() })
        .collect();

    let next = Board::from_parts(
        board.waves().to_vec(),
        boats,
        board.target_index(),
        board.port(),
    );
    debug_assert_eq!(next.cell_counts(), board.cell_counts());
    Some(next)
}
