//! Grid coordinates and move directions.

use std::fmt;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// A board coordinate: `row` counts waves from the top, `col` slots from the
/// left. Signed so that speculative one-step offsets can leave the board and
/// be rejected by a bounds check instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A one-step offset between coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Delta {
    pub row: i32,
    pub col: i32,
}

impl Delta {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

impl Add<Delta> for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Delta) -> Coord {
        Coord::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Coord {
    type Output = Delta;

    #[inline]
    fn sub(self, rhs: Coord) -> Delta {
        Delta::new(self.row - rhs.row, self.col - rhs.col)
    }
}

/// The four axis-aligned move directions.
///
/// Waves slide [`Left`](Direction::Left)/[`Right`](Direction::Right) only;
/// boats move along their own axis. The declaration order is also the fixed
/// order in which move generation tries directions, which keeps search
/// results reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Horizontal directions in generation order.
pub const HORIZONTAL: [Direction; 2] = [Direction::Left, Direction::Right];

/// Vertical directions in generation order.
pub const VERTICAL: [Direction; 2] = [Direction::Up, Direction::Down];

impl Direction {
    #[inline]
    pub fn delta(self) -> Delta {
        match self {
            Direction::Up => Delta::new(-1, 0),
            Direction::Down => Delta::new(1, 0),
            Direction::Left => Delta::new(0, -1),
            Direction::Right => Delta::new(0, 1),
        }
    }

    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Single-letter form used by Solution Notation (`U`, `D`, `L`, `R`).
    #[inline]
    pub fn notation(self) -> char {
        match self {
            Direction::Up => 'U',
            Direction::Down => 'D',
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.notation())
    }
}
