//! Input/output operations and error handling
//!
//! Everything here sits outside the growth core: argument parsing, runtime
//! constants, progress display, and export of the finished (or in-progress)
//! image as PNG and GIF artifacts.

/// Command-line interface and run orchestration
pub mod cli;
/// Runtime constants and configurable defaults
pub mod configuration;
/// Error types for all generator operations
pub mod error;
/// PNG export of the growth field
pub mod image;
/// Progress bar management
pub mod progress;
/// Frame capture and GIF generation of the growth sequence
pub mod visualization;
