//! Runtime constants and configurable defaults

/// Smallest supported channel resolution
pub const MIN_CHANNEL_RESOLUTION: u16 = 1;
/// Largest supported channel resolution
pub const MAX_CHANNEL_RESOLUTION: u16 = 256;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Default grid width in cells
pub const DEFAULT_WIDTH: u32 = 64;
/// Default grid height in cells
pub const DEFAULT_HEIGHT: u32 = 64;
/// Default red channel resolution
pub const DEFAULT_R_RES: u16 = 16;
/// Default green channel resolution
pub const DEFAULT_G_RES: u16 = 16;
/// Default blue channel resolution
pub const DEFAULT_B_RES: u16 = 16;

// Progress bar display settings
/// Commits between progress bar position updates
pub const PROGRESS_UPDATE_INTERVAL: usize = 64;

// Visualization settings
/// Approximate number of frames in an exported growth GIF
pub const TARGET_GIF_FRAMES: usize = 400;
/// Delay between GIF animation frames in milliseconds
pub const GIF_FRAME_DELAY_MS: u32 = 50;
/// Multiplier applied to the final frame's delay for visibility
pub const FINAL_FRAME_HOLD: u32 = 25;
