//! One horizontal row of the board and its slidable block pattern.

use crate::coord::Direction;

/// A wave owns the fixed block pattern of one row. Sliding does not create
/// or destroy blocks; it rotates the pattern circularly by one slot, wrapping
/// at the row boundary. Boats are not part of the wave; they overlay some of
/// its water gaps.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Wave {
    blocks: Vec<bool>,
}

impl Wave {
    pub fn from_blocks(blocks: Vec<bool>) -> Self {
        Self { blocks }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Whether the slot at `col` is a block (as opposed to a water gap).
    #[inline]
    pub fn is_block(&self, col: usize) -> bool {
        self.blocks[col]
    }

    #[inline]
    pub fn block_count(&self) -> usize {
        self.blocks.iter().filter(|&&b| b).count()
    }

    /// Rotates the pattern one slot in a horizontal direction.
    pub fn rotate(&mut self, direction: Direction) {
        debug_assert!(direction.is_horizontal());
        if self.blocks.is_empty() {
            return;
        }
        if direction == Direction::Left {
            self.blocks.rotate_left(1);
        } else {
            self.blocks.rotate_right(1);
        }
    }
}
