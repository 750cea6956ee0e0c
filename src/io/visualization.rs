//! Frame capture and GIF generation of the growth sequence
//!
//! Records each commit as it happens and replays the sequence into GIF
//! frames afterwards. The number of frames is capped by sampling the commit
//! stream at a fixed stride, so large grids still produce a watchable
//! animation.

use image::{Frame, Rgba, RgbaImage};

use crate::io::configuration::{FINAL_FRAME_HOLD, TARGET_GIF_FRAMES};
use crate::io::error::{GrowthError, Result};
use crate::spatial::Coord;

/// Captures the commit sequence for later GIF export
pub struct FrameCapture {
    width: u32,
    height: u32,
    commits: Vec<(Coord, [u8; 4])>,
}

impl FrameCapture {
    /// Create a capture sized for a grid, pre-allocating for every commit
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            commits: Vec::with_capacity(width as usize * height as usize),
        }
    }

    /// Record one committed cell with its display color
    pub fn record_commit(&mut self, coord: Coord, rgba: [u8; 4]) {
        self.commits.push((coord, rgba));
    }

    /// Returns the total number of recorded commits
    pub const fn commit_count(&self) -> usize {
        self.commits.len()
    }

    /// Export the captured growth as an animated GIF
    ///
    /// Frames sample the commit stream at a stride chosen to land near
    /// `TARGET_GIF_FRAMES` frames; the final frame is held longer for
    /// visibility.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No commits were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &str, frame_delay_ms: u32) -> Result<()> {
        if self.commits.is_empty() {
            return Err(GrowthError::InvalidParameter {
                parameter: "visualization",
                value: "empty".to_string(),
                reason: "No commits captured for visualization".to_string(),
            });
        }

        let stride = self.commits.len().div_ceil(TARGET_GIF_FRAMES).max(1);
        let frames = self.generate_frames(stride, frame_delay_ms);

        if let Some(parent) = std::path::Path::new(output_path).parent() {
            std::fs::create_dir_all(parent).map_err(|e| GrowthError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| GrowthError::FileSystem {
            path: output_path.into(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| GrowthError::ImageExport {
                path: output_path.into(),
                source: e,
            })?;

        Ok(())
    }

    fn generate_frames(&self, stride: usize, delay_ms: u32) -> Vec<Frame> {
        let mut canvas = RgbaImage::new(self.width, self.height);
        let mut frames = Vec::with_capacity(self.commits.len() / stride + 2);

        frames.push(Self::frame_from_canvas(&canvas, delay_ms));

        for (index, &(coord, rgba)) in self.commits.iter().enumerate() {
            let in_canvas = coord.x >= 0
                && (coord.x as u32) < self.width
                && coord.y >= 0
                && (coord.y as u32) < self.height;
            if in_canvas {
                canvas.put_pixel(coord.x as u32, coord.y as u32, Rgba(rgba));
            }

            if (index + 1) % stride == 0 {
                frames.push(Self::frame_from_canvas(&canvas, delay_ms));
            }
        }

        if self.commits.len() % stride != 0 {
            frames.push(Self::frame_from_canvas(&canvas, delay_ms));
        }

        // Final frame displays longer for better visibility
        frames.push(Self::frame_from_canvas(&canvas, delay_ms * FINAL_FRAME_HOLD));

        frames
    }

    fn frame_from_canvas(canvas: &RgbaImage, delay_ms: u32) -> Frame {
        Frame::from_parts(
            canvas.clone(),
            0,
            0,
            image::Delay::from_numer_denom_ms(delay_ms, 1),
        )
    }
}
