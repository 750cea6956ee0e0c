//! Grid coordinate value type

use std::fmt;

/// A cell position on the growth grid
///
/// Components are signed so that neighbor offsets of border cells can be
/// formed before bounds checking rejects them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coord {
    /// Horizontal position, valid in `[0, width)`
    pub x: i32,
    /// Vertical position, valid in `[0, height)`
    pub y: i32,
}

impl Coord {
    /// Create a coordinate from its components
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The coordinate shifted by a neighbor offset
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Offsets of the eight surrounding cells, row by row
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];
