//! Spatial data structures
//!
//! This module contains the grid side of the generator:
//! - Grid coordinates with signed components for neighbor arithmetic
//! - The growth field holding per-cell status and committed colors

/// Grid coordinate value type
pub mod coords;
/// Growth field grid and preferred-color averaging
pub mod field;

pub use coords::Coord;
pub use field::{Cell, GrowthField};
