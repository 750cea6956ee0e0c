//! Color primitives
//!
//! This module contains the color-space side of the generator:
//! - The packed color value type and squared-distance metric
//! - The discrete color cube defined by per-channel resolutions

/// Discrete color cube with per-channel resolutions and flat indexing
pub mod cube;
/// Color value type and channel arithmetic
pub mod types;

pub use cube::ColorCube;
pub use types::Color;
