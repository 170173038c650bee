//! The board model: waves, boats, the port, and construction validation.
//!
//! A [`Board`] is an immutable value. Moves never mutate a board; they build
//! a new one, which is what makes deduplication by value correct during
//! search. Construction validates every structural invariant up front and
//! fails atomically with a [`MalformedBoardError`].

pub mod boat;
pub mod cell;
mod parse;
pub mod wave;

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use boat::{Axis, Boat, BoatSpec};
pub use cell::{BoatId, Cell, SegmentRole};
pub use wave::Wave;

use crate::coord::{Coord, Delta};

/// Structural violations detected while constructing a board.
///
/// Construction is atomic: no partial board value exists when any of these
/// is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedBoardError {
    #[error("board has no waves")]
    EmptyBoard,
    #[error("wave {row} has {found} slots, expected {expected}")]
    RowLengthMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("port {port} is outside the board")]
    PortOutOfBounds { port: Coord },
    #[error("boat {id} has no cells")]
    EmptyBoat { id: BoatId },
    #[error("duplicate boat id {id}")]
    DuplicateBoatId { id: BoatId },
    #[error("boat {id} segment {coord} is outside the board")]
    SegmentOutOfBounds { id: BoatId, coord: Coord },
    #[error("boat {id} segment {coord} sits on a block")]
    SegmentOnBlock { id: BoatId, coord: Coord },
    #[error("boats {first} and {second} overlap at {coord}")]
    OverlappingBoats {
        first: BoatId,
        second: BoatId,
        coord: Coord,
    },
    #[error("boat {id} is not a contiguous run read from its front segment")]
    NonContiguousBoat { id: BoatId },
    #[error("board has no target boat")]
    NoTargetBoat,
    #[error("board has more than one target boat")]
    MultipleTargetBoats,
    #[error("target boat {id} needs at least a front and a rear segment")]
    TargetTooShort { id: BoatId },
    #[error("target boat has no front segment marked")]
    TargetFrontMissing,
    #[error("target boat has more than one front segment marked")]
    TargetFrontAmbiguous,
    #[error("unrecognized character {ch:?} at row {row}, column {col}")]
    UnknownCharacter { row: usize, col: usize, ch: char },
}

/// The cell-count triple of a board.
///
/// Every legal move preserves it, so a mismatch between a candidate state
/// and its predecessor marks the candidate as ill-formed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellCounts {
    pub water: usize,
    pub block: usize,
    pub boat: usize,
}

/// A full board configuration: waves, boats, and the port coordinate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    waves: Vec<Wave>,
    /// Boats in ascending id order; generation order for boat moves.
    boats: Vec<Boat>,
    /// Index of the target boat in `boats`.
    target: usize,
    port: Coord,
    /// Merged view of waves and boats, kept consistent with both.
    grid: Vec<Vec<Cell>>,
}

impl Board {
    /// Builds a board from explicit wave patterns (`true` = block), boat
    /// placements, and the port coordinate.
    pub fn new(
        patterns: Vec<Vec<bool>>,
        specs: Vec<BoatSpec>,
        port: Coord,
    ) -> Result<Self, MalformedBoardError> {
        if patterns.is_empty() || patterns[0].is_empty() {
            return Err(MalformedBoardError::EmptyBoard);
        }
        let width = patterns[0].len();
        for (row, p) in patterns.iter().enumerate() {
            if p.len() != width {
                return Err(MalformedBoardError::RowLengthMismatch {
                    row,
                    expected: width,
                    found: p.len(),
                });
            }
        }
        let waves: Vec<Wave> = patterns.into_iter().map(Wave::from_blocks).collect();
        let height = waves.len();

        if !in_bounds(port, height, width) {
            return Err(MalformedBoardError::PortOutOfBounds { port });
        }

        let mut targets = 0usize;
        let mut boats: Vec<Boat> = Vec::with_capacity(specs.len());
        for spec in specs {
            if boats.iter().any(|b| b.id() == spec.id) {
                return Err(MalformedBoardError::DuplicateBoatId { id: spec.id });
            }
            if spec.target {
                targets += 1;
                if spec.cells.len() < 2 {
                    return Err(MalformedBoardError::TargetTooShort { id: spec.id });
                }
            }
            boats.push(validate_boat(spec, &waves)?);
        }
        match targets {
            0 => return Err(MalformedBoardError::NoTargetBoat),
            1 => {}
            _ => return Err(MalformedBoardError::MultipleTargetBoats),
        }

        check_overlaps(&boats)?;

        boats.sort_by_key(|b| b.id());
        let target = boats
            .iter()
            .position(Boat::is_target)
            .ok_or(MalformedBoardError::NoTargetBoat)?;

        Ok(Board::from_parts(waves, boats, target, port))
    }

    /// Assembles a board from already-validated parts and rebuilds the
    /// merged grid. Move transforms use this after the legality check.
    pub(crate) fn from_parts(waves: Vec<Wave>, boats: Vec<Boat>, target: usize, port: Coord) -> Self {
        let grid = build_grid(&waves, &boats);
        Board {
            waves,
            boats,
            target,
            port,
            grid,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.waves[0].len()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.waves.len()
    }

    #[inline]
    pub fn port(&self) -> Coord {
        self.port
    }

    #[inline]
    pub fn waves(&self) -> &[Wave] {
        &self.waves
    }

    /// Boats in ascending id order.
    #[inline]
    pub fn boats(&self) -> &[Boat] {
        &self.boats
    }

    pub fn boat(&self, id: BoatId) -> Option<&Boat> {
        self.boats.iter().find(|b| b.id() == id)
    }

    #[inline]
    pub fn target_boat(&self) -> &Boat {
        &self.boats[self.target]
    }

    #[inline]
    pub(crate) fn target_index(&self) -> usize {
        self.target
    }

    /// Contents of the slot at `at`, or `None` outside the board.
    pub fn cell(&self, at: Coord) -> Option<Cell> {
        if !in_bounds(at, self.height(), self.width()) {
            return None;
        }
        Some(self.grid[at.row as usize][at.col as usize])
    }

    #[inline]
    pub fn in_bounds(&self, at: Coord) -> bool {
        in_bounds(at, self.height(), self.width())
    }

    /// The board is solved when the target boat's front segment sits on the
    /// port.
    #[inline]
    pub fn is_solved(&self) -> bool {
        self.target_boat().front() == self.port
    }

    pub fn cell_counts(&self) -> CellCounts {
        let mut counts = CellCounts::default();
        for row in &self.grid {
            for cell in row {
                match cell {
                    Cell::Water => counts.water += 1,
                    Cell::Block => counts.block += 1,
                    Cell::Segment { .. } => counts.boat += 1,
                }
            }
        }
        counts
    }

    /// Canonical byte encoding of the configuration: the board-format text.
    ///
    /// Equal boards produce equal encodings and distinct boards distinct
    /// ones, independent of move history, so the encoding doubles as the
    /// deduplication key during search.
    pub fn canonical_encoding(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.height() * (self.width() + 1));
        for (i, row) in self.grid.iter().enumerate() {
            if i > 0 {
                out.push(b'\n');
            }
            for cell in row {
                out.push(cell.to_char() as u8);
            }
        }
        out
    }
}

impl fmt::Display for Board {
    /// Renders the board-format text described in the crate docs: one line
    /// per wave, `-` water, `#` block, boat segments as their id with the
    /// target front lowercase.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.grid.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}

#[inline]
fn in_bounds(at: Coord, height: usize, width: usize) -> bool {
    at.row >= 0 && at.col >= 0 && (at.row as usize) < height && (at.col as usize) < width
}

/// Checks bounds, block collisions, and that the cells form a contiguous
/// horizontal or vertical run read from the front segment.
fn validate_boat(spec: BoatSpec, waves: &[Wave]) -> Result<Boat, MalformedBoardError> {
    let BoatSpec { id, cells, target } = spec;
    if cells.is_empty() {
        return Err(MalformedBoardError::EmptyBoat { id });
    }

    let height = waves.len();
    let width = waves[0].len();
    for &c in &cells {
        if !in_bounds(c, height, width) {
            return Err(MalformedBoardError::SegmentOutOfBounds { id, coord: c });
        }
        if waves[c.row as usize].is_block(c.col as usize) {
            return Err(MalformedBoardError::SegmentOnBlock { id, coord: c });
        }
    }

    let axis = if cells.len() == 1 {
        Axis::Horizontal
    } else {
        let step = cells[1] - cells[0];
        let axis = match step {
            Delta { row: 0, col: 1 } | Delta { row: 0, col: -1 } => Axis::Horizontal,
            Delta { row: 1, col: 0 } | Delta { row: -1, col: 0 } => Axis::Vertical,
            _ => return Err(MalformedBoardError::NonContiguousBoat { id }),
        };
        for pair in cells.windows(2) {
            if pair[1] - pair[0] != step {
                return Err(MalformedBoardError::NonContiguousBoat { id });
            }
        }
        axis
    };

    Ok(Boat::new(id, cells, axis, target))
}

fn check_overlaps(boats: &[Boat]) -> Result<(), MalformedBoardError> {
    let mut seen: FxHashMap<Coord, BoatId> = FxHashMap::default();
    for boat in boats {
        for &c in boat.cells() {
            if let Some(&first) = seen.get(&c) {
                return Err(MalformedBoardError::OverlappingBoats {
                    first,
                    second: boat.id(),
                    coord: c,
                });
            }
            seen.insert(c, boat.id());
        }
    }
    Ok(())
}

fn build_grid(waves: &[Wave], boats: &[Boat]) -> Vec<Vec<Cell>> {
    let mut grid: Vec<Vec<Cell>> = waves
        .iter()
        .map(|w| {
            (0..w.len())
                .map(|col| if w.is_block(col) { Cell::Block } else { Cell::Water })
                .collect()
        })
        .collect();

    for boat in boats {
        for (i, &c) in boat.cells().iter().enumerate() {
            grid[c.row as usize][c.col as usize] = Cell::Segment {
                boat: boat.id(),
                role: boat.role_of(i),
            };
        }
    }
    grid
}
