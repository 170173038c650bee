//! Wave moves: sliding a row together with every wave it is coupled to.

use crate::board::{Board, Wave};
use crate::coord::Direction;
use crate::rules::validate::is_legal_candidate;

/// The set of wave rows that must slide together with `row`, itself
/// included, in ascending order.
///
/// A boat carried by a moving wave is dragged with it; if that boat also
/// occupies other waves, those waves are dragged too, and so on until the
/// set is closed. Computed as fixed-point set growth over the bipartite
/// wave/boat touches-relation rather than by recursion, so pathological
/// boards cannot overflow the stack. Waves in between that carry no segment
/// of a dragged boat are not members.
pub fn dependency_set(board: &Board, row: usize) -> Vec<usize> {
    let mut wave_in = vec![false; board.height()];
    let mut boat_in = vec![false; board.boats().len()];
    wave_in[row] = true;

    let mut changed = true;
    while changed {
        changed = false;
        for (i, boat) in board.boats().iter().enumerate() {
            if boat_in[i] {
                continue;
            }
            if boat.cells().iter().any(|c| wave_in[c.row as usize]) {
                boat_in[i] = true;
                changed = true;
                for c in boat.cells() {
                    wave_in[c.row as usize] = true;
                }
            }
        }
    }

    wave_in
        .iter()
        .enumerate()
        .filter_map(|(r, &inside)| inside.then_some(r))
        .collect()
}

/// Attempts to slide wave `row` one slot in a horizontal direction.
///
/// Every wave in the dependency set rotates its block pattern circularly by
/// one slot, and every boat carried by a member wave is dragged one column
/// the same way, wrapping at the row boundary. The speculative result is
/// then validated as a whole; an inadmissible candidate is discarded and the
/// move is a no-op (`None`), not an error.
pub fn wave_move(board: &Board, row: usize, direction: Direction) -> Option<Board> {
    if row >= board.height() || !direction.is_horizontal() {
        return None;
    }

    let cluster = dependency_set(board, row);

    let mut waves: Vec<Wave> = board.waves().to_vec();
    for &r in &cluster {
        waves[r].rotate(direction);
    }

    // The closure guarantees a boat touching any member wave lies entirely
    // within member waves, so dragging whole boats is consistent.
    let width = board.width();
    let boats: Vec<_> = board
        .boats()
        .iter()
        .map(|b| {
            if cluster.iter().any(|&r| b.touches_row(r)) {
                b.dragged(direction, width)
            } else {
                b.clone()
            }
        })
        .collect();

    if !is_legal_candidate(board, &waves, &boats) {
        return None;
    }

    Some(Board::from_parts(
        waves,
        boats,
        board.target_index(),
        board.port(),
    ))
}
