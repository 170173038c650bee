//! The deduplication index: canonical-encoding interning of visited states.

use rustc_hash::FxHashMap;

use crate::board::Board;
use crate::rules::Move;
use crate::search::resources::{ResourceTracker, SearchError};

/// Result of offering a board to the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// The board was not seen before and got this id.
    Fresh(u32),
    /// An equal board was already interned under this id.
    Seen(u32),
}

/// Maps canonical board encodings to dense state ids.
///
/// Two boards with identical cell contents are the same search node
/// regardless of how they were reached. Alongside the interned boards the
/// index keeps, per state, the move that produced it and a back-reference to
/// its predecessor, so a path can be reconstructed without storing full
/// paths per frontier entry. The index is owned by a single search call;
/// there is no process-wide visited set.
#[derive(Debug, Default)]
pub struct StateIndex {
    id_of: FxHashMap<Vec<u8>, u32>,
    boards: Vec<Board>,
    provenance: Vec<Option<(u32, Move)>>,
}

impl StateIndex {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    #[inline]
    pub fn board(&self, id: u32) -> &Board {
        &self.boards[id as usize]
    }

    /// Interns `board` unless an equal board is already present.
    /// Lookup and insertion are O(len(encoding)) amortized.
    pub fn offer(
        &mut self,
        board: Board,
        produced_by: Option<(u32, Move)>,
        tracker: &mut ResourceTracker,
    ) -> Result<Slot, SearchError> {
        let key = board.canonical_encoding();
        if let Some(&id) = self.id_of.get(&key) {
            return Ok(Slot::Seen(id));
        }

        tracker.bump_states("dedup_index", 1)?;
        tracker.try_reserve_boards("dedup_index", &mut self.boards, 1)?;
        tracker.try_reserve_map("dedup_index", "id_of", &mut self.id_of, 1)?;

        let id = self.boards.len() as u32;
        self.boards.push(board);
        self.provenance.push(produced_by);
        self.id_of.insert(key, id);
        Ok(Slot::Fresh(id))
    }

    /// Reconstructs the move sequence from the root to `id` by walking the
    /// predecessor chain backwards.
    pub fn path_to(&self, id: u32) -> Vec<Move> {
        let mut moves = Vec::new();
        let mut at = id;
        while let Some((parent, mv)) = self.provenance[at as usize] {
            moves.push(mv);
            at = parent;
        }
        moves.reverse();
        moves
    }
}
