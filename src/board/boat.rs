//! Boats: multi-cell pieces overlaid on the waves' water gaps.

use crate::board::cell::{BoatId, SegmentRole};
use crate::coord::{Coord, Direction, HORIZONTAL, VERTICAL};

/// Orientation of a boat's cell run.
///
/// Single-row boats (including one-cell boats) are horizontal and move along
/// their row; boats spanning several consecutive waves are vertical and move
/// between rows. Boats never rotate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Directions a boat on this axis may move in, in generation order.
    #[inline]
    pub fn directions(self) -> [Direction; 2] {
        match self {
            Axis::Horizontal => HORIZONTAL,
            Axis::Vertical => VERTICAL,
        }
    }
}

/// Boat placement as supplied to [`Board::new`](crate::board::Board::new).
///
/// `cells` are listed from the front segment to the rear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoatSpec {
    pub id: BoatId,
    pub cells: Vec<Coord>,
    pub target: bool,
}

impl BoatSpec {
    pub fn new(id: BoatId, cells: Vec<Coord>) -> Self {
        let target = id.is_target();
        Self { id, cells, target }
    }
}

/// A validated boat: a contiguous run of cells ordered front to rear.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Boat {
    id: BoatId,
    cells: Vec<Coord>,
    axis: Axis,
    target: bool,
}

impl Boat {
    pub(crate) fn new(id: BoatId, cells: Vec<Coord>, axis: Axis, target: bool) -> Self {
        Self {
            id,
            cells,
            axis,
            target,
        }
    }

    #[inline]
    pub fn id(&self) -> BoatId {
        self.id
    }

    /// Occupied cells, front first, rear last.
    #[inline]
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn front(&self) -> Coord {
        self.cells[0]
    }

    #[inline]
    pub fn rear(&self) -> Coord {
        self.cells[self.cells.len() - 1]
    }

    #[inline]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    #[inline]
    pub fn is_target(&self) -> bool {
        self.target
    }

    pub fn contains(&self, at: Coord) -> bool {
        self.cells.contains(&at)
    }

    /// Whether any segment sits on wave `row`.
    pub fn touches_row(&self, row: usize) -> bool {
        self.cells.iter().any(|c| c.row == row as i32)
    }

    /// Role of the segment at `cells()[index]`. One-cell boats have a single
    /// front segment.
    pub fn role_of(&self, index: usize) -> SegmentRole {
        if index == 0 {
            SegmentRole::Front
        } else if index == self.cells.len() - 1 {
            SegmentRole::Rear
        } else {
            SegmentRole::Middle
        }
    }

    /// Copy of this boat with every cell offset by the direction's delta,
    /// columns wrapping at `width`. Used by wave slides, which drag carried
    /// boats circularly along with the pattern.
    pub(crate) fn dragged(&self, direction: Direction, width: usize) -> Boat {
        debug_assert!(direction.is_horizontal());
        let d = direction.delta();
        let cells = self
            .cells
            .iter()
            .map(|c| Coord::new(c.row, (c.col + d.col).rem_euclid(width as i32)))
            .collect();
        Boat {
            id: self.id,
            cells,
            axis: self.axis,
            target: self.target,
        }
    }

    /// Copy of this boat with every cell offset by the direction's delta,
    /// without wrapping. Used by boat moves; bounds are the caller's check.
    pub(crate) fn shifted(&self, direction: Direction) -> Boat {
        let d = direction.delta();
        let cells = self.cells.iter().map(|&c| c + d).collect();
        Boat {
            id: self.id,
            cells,
            axis: self.axis,
            target: self.target,
        }
    }
}
