//! Discrete color cube with per-channel resolutions and flat indexing
//!
//! The cube is the product space of three channel ranges. Resolutions need
//! not be equal, so a 4×2×2 cube is as valid as 16×16×16. Colors are
//! addressed by a flat index in red-major order, matching the order the pool
//! enumerates its leaves in.

use crate::color::Color;
use crate::io::configuration::{MAX_CHANNEL_RESOLUTION, MIN_CHANNEL_RESOLUTION};
use crate::io::error::{GrowthError, Result};

/// The product space of three discrete color-channel ranges
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorCube {
    r_res: u16,
    g_res: u16,
    b_res: u16,
}

impl ColorCube {
    /// Create a cube from per-channel resolutions
    ///
    /// # Errors
    ///
    /// Returns `ResolutionOutOfRange` if any resolution falls outside the
    /// supported channel range (1..=256 inclusive).
    pub const fn new(r_res: u16, g_res: u16, b_res: u16) -> Result<Self> {
        if r_res < MIN_CHANNEL_RESOLUTION || r_res > MAX_CHANNEL_RESOLUTION {
            return Err(GrowthError::ResolutionOutOfRange {
                channel: "red",
                value: r_res,
            });
        }
        if g_res < MIN_CHANNEL_RESOLUTION || g_res > MAX_CHANNEL_RESOLUTION {
            return Err(GrowthError::ResolutionOutOfRange {
                channel: "green",
                value: g_res,
            });
        }
        if b_res < MIN_CHANNEL_RESOLUTION || b_res > MAX_CHANNEL_RESOLUTION {
            return Err(GrowthError::ResolutionOutOfRange {
                channel: "blue",
                value: b_res,
            });
        }
        Ok(Self {
            r_res,
            g_res,
            b_res,
        })
    }

    /// Red channel resolution
    pub const fn r_res(&self) -> u16 {
        self.r_res
    }

    /// Green channel resolution
    pub const fn g_res(&self) -> u16 {
        self.g_res
    }

    /// Blue channel resolution
    pub const fn b_res(&self) -> u16 {
        self.b_res
    }

    /// Total number of colors in the cube
    pub const fn len(&self) -> usize {
        self.r_res as usize * self.g_res as usize * self.b_res as usize
    }

    /// Whether the cube contains no colors (never true for a valid cube)
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether a color's channels all lie within the cube
    pub const fn contains(&self, color: Color) -> bool {
        (color.r as u16) < self.r_res && (color.g as u16) < self.g_res && (color.b as u16) < self.b_res
    }

    /// Flat red-major index of a color known to be inside the cube
    pub const fn flat_index(&self, color: Color) -> usize {
        ((color.r as usize * self.g_res as usize) + color.g as usize) * self.b_res as usize
            + color.b as usize
    }

    /// The color stored at a flat red-major index
    pub const fn color_at(&self, index: usize) -> Color {
        let b = (index % self.b_res as usize) as u8;
        let rest = index / self.b_res as usize;
        let g = (rest % self.g_res as usize) as u8;
        let r = (rest / self.g_res as usize) as u8;
        Color::new(r, g, b)
    }

    /// The color at the center of the cube, the default growth seed color
    pub const fn center(&self) -> Color {
        Color::new(
            (self.r_res / 2) as u8,
            (self.g_res / 2) as u8,
            (self.b_res / 2) as u8,
        )
    }

    /// Map a cube color onto the full 8-bit display range
    ///
    /// Each channel is spread so the cube's extremes land on 0 and 255
    /// regardless of resolution; a resolution-1 channel renders as 0.
    pub const fn display_rgba(&self, color: Color) -> [u8; 4] {
        [
            Self::display_channel(self.r_res, color.r),
            Self::display_channel(self.g_res, color.g),
            Self::display_channel(self.b_res, color.b),
            255,
        ]
    }

    const fn display_channel(res: u16, value: u8) -> u8 {
        if res <= 1 {
            0
        } else {
            ((value as u32 * 255) / (res as u32 - 1)) as u8
        }
    }
}
