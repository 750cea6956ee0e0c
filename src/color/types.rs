//! Color value type and channel arithmetic

use std::fmt;

/// Squared Euclidean distance between two colors
///
/// Channel deltas are at most 255, so three squared deltas always fit.
pub type SquaredDistance = u32;

/// A color inside the generation cube, one byte per channel
///
/// Channel values are cube coordinates in `[0, resolution)`, not display
/// intensities; `ColorCube::display_rgba` maps them to the full byte range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel coordinate
    pub r: u8,
    /// Green channel coordinate
    pub g: u8,
    /// Blue channel coordinate
    pub b: u8,
}

impl Color {
    /// Create a color from its three channel coordinates
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Squared Euclidean distance to another color
    pub const fn squared_distance(self, other: Self) -> SquaredDistance {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as SquaredDistance
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}
