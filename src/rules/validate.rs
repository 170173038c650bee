//! The legality check for speculative wave-move candidates.

use rustc_hash::FxHashSet;

use crate::board::{Board, Boat, CellCounts, Wave};
use crate::coord::Coord;

/// Validates a candidate configuration against the state it would succeed.
///
/// Two statements, in order:
/// 1. the cell-count triple (water, block, boat cells) must match the
///    predecessor's: necessary but not sufficient, since rotation permutes a
///    row's slots and cannot change it, so a mismatch means the dependency
///    propagation dragged a boat without one of its waves;
/// 2. no two boats may claim the same coordinate and no boat may claim a
///    block coordinate: the sufficient check and final authority.
///
/// A failing candidate is simply not a successor; callers drop it silently.
pub fn is_legal_candidate(prev: &Board, waves: &[Wave], boats: &[Boat]) -> bool {
    counts_match(prev.cell_counts(), waves, boats) && placement_is_clear(waves, boats)
}

fn counts_match(expected: CellCounts, waves: &[Wave], boats: &[Boat]) -> bool {
    let total: usize = waves.iter().map(Wave::len).sum();
    let block: usize = waves.iter().map(Wave::block_count).sum();
    let boat: usize = boats.iter().map(Boat::len).sum();
    let Some(water) = total.checked_sub(block + boat) else {
        return false;
    };
    CellCounts { water, block, boat } == expected
}

fn placement_is_clear(waves: &[Wave], boats: &[Boat]) -> bool {
    let height = waves.len() as i32;
    let width = waves.first().map_or(0, Wave::len) as i32;

    let mut claimed: FxHashSet<Coord> = FxHashSet::default();
    for boat in boats {
        for &c in boat.cells() {
            if c.row < 0 || c.row >= height || c.col < 0 || c.col >= width {
                return false;
            }
            if waves[c.row as usize].is_block(c.col as usize) {
                return false;
            }
            if !claimed.insert(c) {
                return false;
            }
        }
    }
    true
}
