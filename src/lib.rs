//! Full-spectrum color image growth from a single seed pixel
//!
//! The generator owns a finite color cube sized exactly to the cell count and
//! grows the image outward one cell at a time: a random frontier cell is
//! chosen, its committed neighbors vote on a preferred color, and the closest
//! color still available in the cube is assigned and permanently removed.
//! Every color appears exactly once in the finished image.

#![forbid(unsafe_code)]

/// Core growth machinery: frontier scheduling, the color pool octree, and the session loop
pub mod algorithm;
/// Color value types and the discrete color cube
pub mod color;
/// Input/output operations and error handling
pub mod io;
/// Grid coordinates and per-cell growth state
pub mod spatial;

pub use io::error::{GrowthError, Result};
