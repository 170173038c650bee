//! Cell-level types: boat identifiers, segment roles, and the slot contents.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Character used for the target boat in the board format (rear segment);
/// its front segment renders as the lowercase form.
pub const TARGET_ID: char = 'X';

/// Character for a passable gap in the board format.
pub const WATER: char = '-';

/// Character for a fixed block in the board format.
pub const BLOCK: char = '#';

/// A boat identifier: an uppercase ASCII letter. The target boat is always
/// [`TARGET_ID`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BoatId(char);

impl BoatId {
    pub const TARGET: BoatId = BoatId(TARGET_ID);

    /// Returns `None` unless `ch` is an uppercase ASCII letter.
    #[inline]
    pub fn new(ch: char) -> Option<Self> {
        ch.is_ascii_uppercase().then_some(BoatId(ch))
    }

    #[inline]
    pub fn as_char(self) -> char {
        self.0
    }

    #[inline]
    pub fn is_target(self) -> bool {
        self.0 == TARGET_ID
    }
}

impl fmt::Display for BoatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Position of a segment within its boat. The front is the designated
/// segment that must reach the port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SegmentRole {
    Front,
    Middle,
    Rear,
}

/// Contents of one board slot.
///
/// A segment occupies what would otherwise be a water gap in the underlying
/// wave pattern; the three kinds are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Water,
    Block,
    Segment { boat: BoatId, role: SegmentRole },
}

impl Cell {
    /// Character used for this cell in the board format. The target boat's
    /// front segment renders lowercase; every other segment renders as its
    /// boat id.
    pub fn to_char(self) -> char {
        match self {
            Cell::Water => WATER,
            Cell::Block => BLOCK,
            Cell::Segment { boat, role } => {
                if boat.is_target() && role == SegmentRole::Front {
                    boat.as_char().to_ascii_lowercase()
                } else {
                    boat.as_char()
                }
            }
        }
    }

    #[inline]
    pub fn is_water(self) -> bool {
        self == Cell::Water
    }

    #[inline]
    pub fn boat_id(self) -> Option<BoatId> {
        match self {
            Cell::Segment { boat, .. } => Some(boat),
            _ => None,
        }
    }
}
