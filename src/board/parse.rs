//! Parsing of the textual board format.
//!
//! One line per wave; `-` is water, `#` a block, uppercase letters are boat
//! segments. The target boat's rear is always `X` and its front the
//! lowercase `x`; every other boat is written uppercase throughout.

use std::collections::BTreeMap;

use crate::board::cell::{BoatId, BLOCK, WATER};
use crate::board::{Board, BoatSpec, MalformedBoardError};
use crate::coord::Coord;

impl Board {
    /// Parses a board from its textual form. The port coordinate is not part
    /// of the format and is supplied separately.
    pub fn from_text(text: &str, port: Coord) -> Result<Self, MalformedBoardError> {
        let mut patterns: Vec<Vec<bool>> = Vec::new();
        // Scan-ordered cells per boat id, with the front marker per cell.
        let mut segments: BTreeMap<char, Vec<(Coord, bool)>> = BTreeMap::new();

        for (row, line) in text.trim().split('\n').enumerate() {
            let line = line.trim();
            let mut pattern = Vec::with_capacity(line.len());
            for (col, ch) in line.chars().enumerate() {
                let at = Coord::new(row as i32, col as i32);
                match ch {
                    WATER => pattern.push(false),
                    BLOCK => pattern.push(true),
                    'A'..='Z' => {
                        pattern.push(false);
                        segments.entry(ch).or_default().push((at, false));
                    }
                    'x' => {
                        pattern.push(false);
                        segments.entry('X').or_default().push((at, true));
                    }
                    _ => return Err(MalformedBoardError::UnknownCharacter { row, col, ch }),
                }
            }
            patterns.push(pattern);
        }

        let mut specs = Vec::with_capacity(segments.len());
        for (id_char, cells) in segments {
            let id = BoatId::new(id_char).ok_or(MalformedBoardError::UnknownCharacter {
                row: 0,
                col: 0,
                ch: id_char,
            })?;
            specs.push(BoatSpec::new(id, order_from_front(id, cells)?));
        }

        Board::new(patterns, specs, port)
    }
}

/// Orders a boat's scan-ordered cells front first.
///
/// The target must carry exactly one front marker and it must sit at an end
/// of the run; unmarked boats take the scan-order head as their front.
fn order_from_front(
    id: BoatId,
    cells: Vec<(Coord, bool)>,
) -> Result<Vec<Coord>, MalformedBoardError> {
    let fronts = cells.iter().filter(|(_, f)| *f).count();
    if id.is_target() {
        if fronts == 0 {
            return Err(MalformedBoardError::TargetFrontMissing);
        }
        if fronts > 1 {
            return Err(MalformedBoardError::TargetFrontAmbiguous);
        }
    }

    // Scan order is already sorted by (row, col); a straight run is sorted
    // end to end, so the front is either the head or the tail.
    let mut ordered: Vec<Coord> = cells.iter().map(|&(c, _)| c).collect();
    if let Some(pos) = cells.iter().position(|(_, f)| *f) {
        if pos == cells.len() - 1 {
            ordered.reverse();
        } else if pos != 0 {
            return Err(MalformedBoardError::NonContiguousBoat { id });
        }
    }
    Ok(ordered)
}
