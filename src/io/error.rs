//! Error types for all generator operations

use std::fmt;
use std::path::PathBuf;

use crate::color::Color;
use crate::spatial::Coord;

/// Main error type for all generator operations
///
/// Configuration variants are fatal to session creation; invariant variants
/// indicate a logic bug rather than a transient condition and leave the
/// running session untrustworthy. No operation is ever retried: recovery
/// means refusing an operation known to violate an invariant, not
/// re-attempting it.
#[derive(Debug)]
pub enum GrowthError {
    /// Cell count and color count disagree, so no bijection exists
    DimensionMismatch {
        /// Grid width in cells
        width: u32,
        /// Grid height in cells
        height: u32,
        /// Red channel resolution
        r_res: u16,
        /// Green channel resolution
        g_res: u16,
        /// Blue channel resolution
        b_res: u16,
    },

    /// Channel resolution outside the supported range
    ResolutionOutOfRange {
        /// Name of the offending channel
        channel: &'static str,
        /// Provided resolution
        value: u16,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Color lies outside the configured cube
    ColorOutOfCube {
        /// The offending color
        color: Color,
    },

    /// Color was already removed from the pool
    ColorUnavailable {
        /// The offending color
        color: Color,
    },

    /// Nearest-available query against an empty pool
    PoolExhausted,

    /// Coordinate lies outside the grid
    CoordOutOfBounds {
        /// The offending coordinate
        coord: Coord,
        /// Grid width in cells
        width: u32,
        /// Grid height in cells
        height: u32,
    },

    /// Attempt to commit a cell that already holds a color
    CellAlreadySet {
        /// The offending coordinate
        coord: Coord,
    },

    /// Attempt to remove a coordinate the frontier does not contain
    NotQueued {
        /// The offending coordinate
        coord: Coord,
    },

    /// Attempt to queue a coordinate when every cell is already queued
    FrontierFull {
        /// Frontier capacity in cells
        capacity: usize,
    },

    /// Preferred-color request for a cell with no committed neighbor
    ///
    /// Only the seed cell may legitimately lack committed neighbors, and the
    /// seed path never asks for a preference.
    IsolatedCell {
        /// The offending coordinate
        coord: Coord,
    },

    /// Failed to save a generated image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for GrowthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch {
                width,
                height,
                r_res,
                g_res,
                b_res,
            } => {
                write!(
                    f,
                    "width * height must equal r_res * g_res * b_res: \
                     {width} * {height} == {} but {r_res} * {g_res} * {b_res} == {}",
                    u64::from(*width) * u64::from(*height),
                    u64::from(*r_res) * u64::from(*g_res) * u64::from(*b_res)
                )
            }
            Self::ResolutionOutOfRange { channel, value } => {
                write!(
                    f,
                    "{channel} channel resolution {value} is outside the supported range 1..=256"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ColorOutOfCube { color } => {
                write!(f, "Color {color} lies outside the configured cube")
            }
            Self::ColorUnavailable { color } => {
                write!(f, "Color {color} has already been removed from the pool")
            }
            Self::PoolExhausted => {
                write!(f, "Nearest-color query against an exhausted pool")
            }
            Self::CoordOutOfBounds {
                coord,
                width,
                height,
            } => {
                write!(
                    f,
                    "Coordinate {coord} is outside the {width}x{height} grid"
                )
            }
            Self::CellAlreadySet { coord } => {
                write!(f, "Cell {coord} already holds a committed color")
            }
            Self::NotQueued { coord } => {
                write!(f, "Coordinate {coord} is not in the frontier")
            }
            Self::FrontierFull { capacity } => {
                write!(f, "Frontier is full ({capacity} coordinates)")
            }
            Self::IsolatedCell { coord } => {
                write!(f, "Cell {coord} has no committed neighbor to average")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for GrowthError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generator results
pub type Result<T> = std::result::Result<T, GrowthError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GrowthError {
    GrowthError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{GrowthError, invalid_parameter};

    #[test]
    fn test_display_names_the_offending_values() {
        let err = GrowthError::DimensionMismatch {
            width: 4,
            height: 4,
            r_res: 4,
            g_res: 2,
            b_res: 1,
        };
        let message = err.to_string();
        assert!(message.contains("16"));
        assert!(message.contains('8'));

        let err = invalid_parameter("seed_coord", &"(9, 9)", &"outside the grid");
        assert!(err.to_string().contains("seed_coord"));
    }
}
